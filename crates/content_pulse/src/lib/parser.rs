//! # Response Parser
//!
//! Best-effort extraction of the structured fields each prompt template asks
//! the model to emit. Parsing never fails: when the expected markers are
//! absent the whole raw text degrades into the unstructured field for that
//! platform, paired with a sentinel message where one is expected.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Platform;

static SUMMARY_TAKEAWAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Summary\s*:\s*(.*?)\s*Key Takeaways\s*:\s*(.*)$").unwrap());

static SUMMARY_NOTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Summary\s*:?\s*(.*?)\s*Main Notes\s*:?\s*(.*)$").unwrap());

static FINAL_POST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Final Post:\s*(.*)").unwrap());

static POST_SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Summary:\s*(.*)").unwrap());

static BLOG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)Blog:\s*(.*)").unwrap());

pub const NO_TAKEAWAYS_FALLBACK: &str = "No key takeaways extracted due to formatting issues.";
pub const NO_NOTES_FALLBACK: &str = "No key notes extracted due to formatting issues.";

/// Structured view over one generation's raw text, by platform family.
/// Every field is always populated; worst case it holds the whole raw text
/// or a fallback sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedContent {
    Post {
        final_post: String,
        summary: String,
        blog: String,
    },
    Summary {
        summary: String,
        takeaways: String,
    },
    Notes {
        summary: String,
        notes: String,
    },
}

pub fn parse_generated(platform: &Platform, raw: &str) -> ParsedContent {
    match platform {
        Platform::Summary => parse_summary(raw),
        Platform::NoteTaking => parse_notes(raw),
        _ => parse_post(raw),
    }
}

fn parse_summary(raw: &str) -> ParsedContent {
    match SUMMARY_TAKEAWAYS_RE.captures(raw) {
        Some(caps) => ParsedContent::Summary {
            summary: caps[1].trim().to_string(),
            takeaways: caps[2].trim().to_string(),
        },
        None => ParsedContent::Summary {
            summary: raw.trim().to_string(),
            takeaways: NO_TAKEAWAYS_FALLBACK.to_string(),
        },
    }
}

fn parse_notes(raw: &str) -> ParsedContent {
    match SUMMARY_NOTES_RE.captures(raw) {
        // Markdown emphasis markers leak into these captures often enough
        // that the original interface stripped them wholesale.
        Some(caps) => ParsedContent::Notes {
            summary: caps[1].trim().replace("**", ""),
            notes: caps[2].trim().replace("**", ""),
        },
        None => ParsedContent::Notes {
            summary: raw.trim().to_string(),
            notes: NO_NOTES_FALLBACK.to_string(),
        },
    }
}

fn parse_post(raw: &str) -> ParsedContent {
    let capture = |re: &Regex| {
        re.captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    let final_post = capture(&FINAL_POST_RE);
    let summary = capture(&POST_SUMMARY_RE);
    // A missing "Blog:" marker must not drop content - the whole response
    // becomes the blog field.
    let blog = BLOG_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| raw.trim().to_string());

    ParsedContent::Post {
        final_post,
        summary,
        blog,
    }
}
