use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{
    error::{FragmentError, Result},
    source::TranscriptSource,
    types::{Segment, VideoId},
};

/// Transcript source backed by YouTube's caption tracks.
#[derive(Debug, Default, Clone, Copy)]
pub struct YoutubeTranscriptSource;

impl YoutubeTranscriptSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: &[String],
    ) -> Result<Vec<Segment>> {
        let unavailable = |reason: String| FragmentError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason,
        };

        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| unavailable(e.to_string()))?;

        let languages: Vec<&str> = languages.iter().map(String::as_str).collect();
        let transcript = api
            .fetch_transcript(video_id.as_str(), &languages, false)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| Segment::new(snippet.text, snippet.start, snippet.duration))
            .collect())
    }
}
