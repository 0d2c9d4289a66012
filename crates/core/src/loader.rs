use async_trait::async_trait;

use crate::{
    config::LoaderConfig,
    error::{FragmentError, Result},
    format::{MetadataBlock, normalize_transcript, render_fragment},
    registry::FragmentLoader,
    source::{MetadataSource, TranscriptSource, YoutubeTranscriptSource, YtDlpMetadataSource},
    types::Fragment,
    video_id::extract_video_id,
};

/// Turns a YouTube URL into a fragment: transcript is mandatory, metadata is best-effort.
pub struct TranscriptLoader<T, M> {
    transcripts: T,
    metadata: M,
    languages: Vec<String>,
}

impl TranscriptLoader<YoutubeTranscriptSource, YtDlpMetadataSource> {
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(
            YoutubeTranscriptSource::new(),
            YtDlpMetadataSource::new(config.ytdlp_program.clone(), config.ytdlp_retries),
            config.transcript_languages.clone(),
        )
    }
}

impl<T: TranscriptSource, M: MetadataSource> TranscriptLoader<T, M> {
    pub fn new(transcripts: T, metadata: M, languages: Vec<String>) -> Self {
        Self {
            transcripts,
            metadata,
            languages,
        }
    }

    pub async fn fetch_fragment(&self, url: &str) -> Result<Fragment> {
        let video_id = extract_video_id(url).ok_or_else(|| FragmentError::InvalidUrl {
            url: url.to_string(),
        })?;
        tracing::debug!(%video_id, url, "resolved video id");

        let segments = self
            .transcripts
            .fetch_transcript(&video_id, &self.languages)
            .await?;
        tracing::debug!(%video_id, segments = segments.len(), "fetched transcript");
        let transcript = normalize_transcript(&segments);

        let metadata = self.metadata_block(url).await;
        let content = render_fragment(metadata.as_ref(), &transcript);

        Ok(Fragment::new(content, url))
    }

    async fn metadata_block(&self, url: &str) -> Option<MetadataBlock> {
        let result = self
            .metadata
            .fetch_metadata(url)
            .await
            .and_then(MetadataBlock::try_from);

        match result {
            Ok(block) => Some(block),
            Err(e) if e.is_unreachable() => {
                tracing::warn!(url, error = %e, "metadata source unreachable, omitting metadata");
                None
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "metadata incomplete, omitting metadata");
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl<T, M> FragmentLoader for TranscriptLoader<T, M>
where
    T: TranscriptSource,
    M: MetadataSource,
{
    async fn load(&self, argument: &str) -> Result<Fragment> {
        self.fetch_fragment(argument).await
    }
}
