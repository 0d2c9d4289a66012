//! External collaborators that supply transcript text and video metadata.

mod transcript;
mod ytdlp;

use async_trait::async_trait;

use crate::{
    error::{MetadataError, Result},
    types::{Segment, VideoId, VideoMetadata},
};

pub use transcript::YoutubeTranscriptSource;
pub use ytdlp::YtDlpMetadataSource;

#[async_trait(?Send)]
pub trait TranscriptSource {
    /// Fetch transcript segments in playback order, trying `languages` in order.
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: &[String],
    ) -> Result<Vec<Segment>>;
}

#[async_trait(?Send)]
pub trait MetadataSource {
    /// Fetch metadata for the video at `url` (the URL as given, not the video id).
    async fn fetch_metadata(&self, url: &str)
    -> std::result::Result<VideoMetadata, MetadataError>;
}
