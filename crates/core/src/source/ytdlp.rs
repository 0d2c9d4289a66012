use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::{error::MetadataError, source::MetadataSource, types::VideoMetadata};

/// Metadata source that asks `yt-dlp` for the video's info JSON without downloading media.
#[derive(Debug, Clone)]
pub struct YtDlpMetadataSource {
    program: String,
    retries: u32,
}

/// The subset of yt-dlp's info dict we read.
#[derive(Debug, Deserialize)]
struct InfoJson {
    title: Option<String>,
    channel: Option<String>,
    upload_date: Option<String>,
    description: Option<String>,
}

impl From<InfoJson> for VideoMetadata {
    fn from(info: InfoJson) -> Self {
        VideoMetadata {
            title: info.title,
            channel: info.channel,
            upload_date: info.upload_date,
            description: info.description,
        }
    }
}

impl YtDlpMetadataSource {
    pub fn new(program: impl Into<String>, retries: u32) -> Self {
        Self {
            program: program.into(),
            retries,
        }
    }

    fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--dump-single-json")
            .arg("--skip-download")
            .arg("--no-playlist")
            .arg("--retries")
            .arg(self.retries.to_string())
            .arg("--fragment-retries")
            .arg(self.retries.to_string())
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("--")
            .arg(url);
        cmd
    }
}

/// Parse the JSON document yt-dlp prints for a single video.
fn parse_info_json(stdout: &[u8]) -> Result<VideoMetadata, MetadataError> {
    let info: InfoJson = serde_json::from_slice(stdout)?;
    Ok(info.into())
}

#[async_trait(?Send)]
impl MetadataSource for YtDlpMetadataSource {
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, MetadataError> {
        tracing::debug!(program = %self.program, url, "running yt-dlp for metadata");
        let output = self.command(url).output().await?;

        if !output.status.success() {
            return Err(MetadataError::Unreachable {
                url: url.to_string(),
                reason: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        parse_info_json(&output.stdout)
    }
}
