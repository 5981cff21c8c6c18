pub mod captions;

use std::{fmt::Debug, future::Future, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use serde::Deserialize;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .unwrap()
});

/// A single timestamped caption segment as returned by the transcript source.
/// Only `text` is consumed downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

pub trait TranscriptFetcher {
    type Error: Debug;

    fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[&str],
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, Self::Error>>;
}

/// Pulls the 11-character video id out of a full or short YouTube link.
///
/// Inputs that match neither URL shape come back unchanged - a bare id passes
/// through, and so does garbage (the transcript source rejects it later).
pub fn extract_video_id(input: &str) -> &str {
    VIDEO_ID_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(input)
}

/// Collapses all whitespace runs to single spaces and trims both ends.
/// Idempotent: formatting an already-formatted string is a no-op.
pub fn format_transcript(raw: &str) -> String {
    raw.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extracts_id_from_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_scheme_and_www_are_optional() {
        assert_eq!(
            extract_video_id("youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(extract_video_id("youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_trailing_query_params_are_ignored() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_bare_id_passes_through() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_unrecognized_input_passes_through_unchanged() {
        assert_eq!(extract_video_id("not a url at all"), "not a url at all");
        assert_eq!(extract_video_id(""), "");
    }

    #[test]
    fn test_format_collapses_whitespace_and_trims() {
        assert_eq!(
            format_transcript("  hello\n\n  world\tagain  "),
            "hello world again"
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        for raw in ["  a\n b  ", "already formatted", "", "\t\n "] {
            let once = format_transcript(raw);
            assert_eq!(format_transcript(&once), once);
        }
    }
}
