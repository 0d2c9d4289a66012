use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{
    error::MetadataError,
    types::{Segment, VideoMetadata},
};

pub const HEADER: &str = "Video Information:";
pub const METADATA_FAILURE_NOTICE: &str =
    "There was an error in extracting video title, channel, date, and description.";

const MUSIC_MARKER: &str = "[Music]";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("whitespace pattern is valid"));

/// Collapse transcript segments into a single line of text.
pub fn normalize_transcript(segments: &[Segment]) -> String {
    let joined = segments
        .iter()
        .map(|seg| seg.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let flattened = joined.replace('\n', " ").replace(MUSIC_MARKER, "");
    WHITESPACE_RUN.replace_all(&flattened, " ").into_owned()
}

/// Format a `YYYYMMDD` upload date as e.g. `January 05, 2023`
pub fn format_upload_date(raw: &str) -> Result<String, MetadataError> {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map(|date| date.format("%B %d, %Y").to_string())
        .map_err(|_| MetadataError::InvalidDate {
            raw: raw.to_string(),
        })
}

/// Validated, display-ready metadata. Only built when every field is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    pub title: String,
    pub uploader: String,
    pub date: String,
    pub description: String,
}

impl TryFrom<VideoMetadata> for MetadataBlock {
    type Error = MetadataError;

    fn try_from(meta: VideoMetadata) -> Result<Self, Self::Error> {
        let title = meta.title.ok_or(MetadataError::MissingField("title"))?;
        let uploader = meta.channel.ok_or(MetadataError::MissingField("channel"))?;
        let raw_date = meta
            .upload_date
            .ok_or(MetadataError::MissingField("upload_date"))?;
        let description = meta
            .description
            .ok_or(MetadataError::MissingField("description"))?;

        Ok(Self {
            title,
            uploader,
            date: format_upload_date(&raw_date)?,
            description: description.replace('\n', " "),
        })
    }
}

/// Render the fragment text. `None` metadata yields the failure notice in its place.
pub fn render_fragment(metadata: Option<&MetadataBlock>, transcript: &str) -> String {
    let mut lines = vec![HEADER.to_string()];

    match metadata {
        Some(meta) => {
            lines.push(format!("Title: {}", meta.title));
            lines.push(format!("Uploader: {}", meta.uploader));
            lines.push(format!("Date: {}", meta.date));
            lines.push(format!("Description: {}", meta.description));
        }
        None => lines.push(METADATA_FAILURE_NOTICE.to_string()),
    }

    lines.push(format!("Transcript: {}", transcript));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(texts: &[&str]) -> Vec<Segment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Segment::new(*t, i as f64, 1.0))
            .collect()
    }

    fn full_metadata() -> VideoMetadata {
        VideoMetadata {
            title: Some("T".into()),
            channel: Some("C".into()),
            upload_date: Some("20230101".into()),
            description: Some("D".into()),
        }
    }

    #[test]
    fn transcript_drops_newlines_music_and_extra_spaces() {
        let text = normalize_transcript(&segments(&["Hello\n", "  [Music]  world"]));
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn transcript_joins_segments() {
        let text = normalize_transcript(&segments(&["Test ", " transcript"]));
        assert_eq!(text, "Test transcript");
    }

    #[test]
    fn transcript_removes_every_music_marker() {
        let text = normalize_transcript(&segments(&["[Music]", "a [Music][Music] b", "[Music]"]));
        assert!(!text.contains("[Music]"));
        assert!(!text.contains('\n'));
        assert!(!text.contains("  "));
        assert!(text.contains("a b"));
    }

    #[test]
    fn transcript_collapses_tabs_and_unicode_space() {
        let text = normalize_transcript(&segments(&["one\t\ttwo\u{00a0} three"]));
        assert_eq!(text, "one two three");
    }

    #[test]
    fn empty_transcript_is_empty() {
        assert_eq!(normalize_transcript(&[]), "");
    }

    #[test]
    fn upload_date_is_long_form() {
        assert_eq!(format_upload_date("20230115").unwrap(), "January 15, 2023");
        assert_eq!(format_upload_date("20231201").unwrap(), "December 01, 2023");
    }

    #[test]
    fn bad_upload_date_is_rejected() {
        for raw in ["2023-01-15", "20231315", "yesterday", ""] {
            assert!(
                matches!(format_upload_date(raw), Err(MetadataError::InvalidDate { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn metadata_block_flattens_description() {
        let mut meta = full_metadata();
        meta.description = Some("line one\nline two".into());
        let block = MetadataBlock::try_from(meta).unwrap();
        assert_eq!(block.description, "line one line two");
        assert_eq!(block.date, "January 01, 2023");
    }

    #[test]
    fn metadata_block_fails_closed_on_any_missing_field() {
        let strip: [fn(&mut VideoMetadata); 4] = [
            |m: &mut VideoMetadata| m.title = None,
            |m: &mut VideoMetadata| m.channel = None,
            |m: &mut VideoMetadata| m.upload_date = None,
            |m: &mut VideoMetadata| m.description = None,
        ];
        for remove in strip {
            let mut meta = full_metadata();
            remove(&mut meta);
            assert!(matches!(
                MetadataBlock::try_from(meta),
                Err(MetadataError::MissingField(_))
            ));
        }
    }

    #[test]
    fn metadata_block_fails_closed_on_bad_date() {
        let mut meta = full_metadata();
        meta.upload_date = Some("Jan 1 2023".into());
        assert!(matches!(
            MetadataBlock::try_from(meta),
            Err(MetadataError::InvalidDate { .. })
        ));
    }

    #[test]
    fn renders_full_fragment_in_order() {
        let block = MetadataBlock::try_from(full_metadata()).unwrap();
        let text = render_fragment(Some(&block), "Test transcript");
        assert_eq!(
            text,
            "Video Information:\n\
             Title: T\n\
             Uploader: C\n\
             Date: January 01, 2023\n\
             Description: D\n\
             Transcript: Test transcript"
        );
    }

    #[test]
    fn renders_notice_without_metadata() {
        let text = render_fragment(None, "hi");
        assert_eq!(
            text,
            format!("Video Information:\n{}\nTranscript: hi", METADATA_FAILURE_NOTICE)
        );
        for label in ["Title:", "Uploader:", "Date:", "Description:"] {
            assert!(!text.contains(label), "{label}");
        }
    }
}
