//! ytfrag Core Library
//!
//! Resolves YouTube URLs to video ids, fetches transcripts and metadata, and
//! assembles them into a plain-text fragment for LLM prompts.

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod registry;
pub mod source;
pub mod types;
pub mod video_id;

pub use config::LoaderConfig;
pub use error::{FragmentError, MetadataError, Result};
pub use format::{
    METADATA_FAILURE_NOTICE, MetadataBlock, format_upload_date, normalize_transcript,
    render_fragment,
};
pub use loader::TranscriptLoader;
pub use registry::{FragmentLoader, LoaderRegistry, YOUTUBE_TAG, register_fragment_loaders};
pub use source::{MetadataSource, TranscriptSource, YoutubeTranscriptSource, YtDlpMetadataSource};
pub use types::{Fragment, Segment, VideoId, VideoMetadata};
pub use video_id::extract_video_id;
