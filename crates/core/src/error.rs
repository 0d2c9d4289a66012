use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Invalid YouTube URL: unable to extract video ID from {url}")]
    InvalidUrl { url: String },

    #[error("Transcript unavailable for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Malformed fragment reference {reference:?}: expected <tag>:<argument>")]
    MalformedReference { reference: String },

    #[error("No fragment loader registered for tag {tag:?}")]
    UnknownLoader { tag: String },

    #[error("Loader registration failed: {reason}")]
    Registration { reason: String },
}

/// Reasons the metadata section of a fragment could not be produced.
///
/// These never escape a load: they are logged and replaced by a notice line.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Metadata source failed for {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Metadata field {0} is missing")]
    MissingField(&'static str),

    #[error("Upload date {raw:?} is not in YYYYMMDD form")]
    InvalidDate { raw: String },
}

impl MetadataError {
    /// True when the source itself failed, false when it answered with unusable data.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            MetadataError::Unreachable { .. } | MetadataError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FragmentError>;
