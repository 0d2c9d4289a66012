//! Video identifier resolution for the YouTube URL shapes we accept.

use url::Url;

use crate::types::VideoId;

fn is_youtube_host(host: &str) -> bool {
    host.eq_ignore_ascii_case("youtube.com") || host.eq_ignore_ascii_case("www.youtube.com")
}

/// Extract the video identifier from a YouTube or youtu.be URL.
///
/// Returns `None` for anything that does not parse or does not match one of
/// `/watch?v=ID`, `/embed/ID`, `/shorts/ID` on youtube.com, or `youtu.be/ID`.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    let path = parsed.path();

    let id = if is_youtube_host(host) {
        if path == "/watch" {
            parsed
                .query_pairs()
                .filter(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())
                .find(|v| !v.is_empty())?
        } else if let Some(rest) = path
            .strip_prefix("/embed/")
            .or_else(|| path.strip_prefix("/shorts/"))
        {
            rest.split('/').next()?.to_string()
        } else {
            return None;
        }
    } else if host.eq_ignore_ascii_case("youtu.be") {
        path.trim_start_matches('/').to_string()
    } else {
        return None;
    };

    if id.is_empty() {
        return None;
    }

    Some(VideoId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        extract_video_id(url).map(|v| v.as_str().to_string())
    }

    #[test]
    fn supported_shapes_resolve_to_the_same_id() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn watch_ignores_other_query_params() {
        assert_eq!(
            id("https://www.youtube.com/watch?t=42&v=abc123&list=PL1").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn host_is_case_insensitive() {
        assert_eq!(
            id("https://WWW.YouTube.com/watch?v=abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn embed_takes_only_the_next_segment() {
        assert_eq!(
            id("https://www.youtube.com/embed/abc123/extra").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn short_link_keeps_query_out_of_the_id() {
        assert_eq!(
            id("https://youtu.be/abc123?si=tracking").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn unrecognised_urls_are_not_found() {
        let urls = [
            "https://vimeo.com/12345",
            "https://www.youtube.com/channel/UC123",
            "https://www.youtube.com/watch/abc123",
            "https://m.youtube.com/watch?v=abc123",
            "https://www.youtube.com/watch",
            "https://www.youtube.com/watch?v=",
            "https://www.youtube.com/embed/",
            "https://youtu.be/",
            "not a url",
            "youtube.com/watch?v=abc123",
            "",
        ];
        for url in urls {
            assert_eq!(id(url), None, "{url}");
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let url = "https://www.youtube.com/shorts/abc123";
        assert_eq!(extract_video_id(url), extract_video_id(url));
    }
}
