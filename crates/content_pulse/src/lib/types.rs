use std::fmt;

use crate::error::Error;

/// Target output shape for one generation, not the video's hosting platform.
///
/// `Social` is the catch-all for anything that isn't one of the three named
/// formats and carries the user-facing label verbatim so the social template
/// can address the platform by name ("Twitter", "LinkedIn", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    TutorialBlog,
    Summary,
    NoteTaking,
    Social(String),
}

impl Platform {
    /// Maps a user-facing format label to its platform variant.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "tutorial blog" => Platform::TutorialBlog,
            "summary" => Platform::Summary,
            "note taking" => Platform::NoteTaking,
            _ => Platform::Social(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Platform::TutorialBlog => "Tutorial Blog",
            Platform::Summary => "Summary",
            Platform::NoteTaking => "Note Taking",
            Platform::Social(label) => label,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user-triggered generation cycle. Built by the caller, consumed once;
/// credential and model are explicit, never ambient state.
#[derive(Debug, Clone)]
pub struct ContentRequest {
    /// Full video URL or bare 11-character video id.
    pub video: String,
    /// Model identifier forwarded to the LLM service.
    pub model: String,
    /// Requested output formats, in presentation order.
    pub platforms: Vec<Platform>,
    /// Optional free-text instruction interpolated into every prompt.
    pub user_query: Option<String>,
}

/// One platform's slot in the dispatch result, positionally aligned with the
/// requested platform list.
#[derive(Debug)]
pub struct PlatformContent {
    pub platform: Platform,
    pub result: Result<String, Error>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_named_platforms() {
        assert_eq!(Platform::from_label("Tutorial Blog"), Platform::TutorialBlog);
        assert_eq!(Platform::from_label("summary"), Platform::Summary);
        assert_eq!(Platform::from_label("Note Taking"), Platform::NoteTaking);
        assert_eq!(Platform::from_label("  NOTE TAKING  "), Platform::NoteTaking);
    }

    #[test]
    fn test_unknown_labels_become_social() {
        assert_eq!(
            Platform::from_label("LinkedIn"),
            Platform::Social("LinkedIn".to_string())
        );
        assert_eq!(Platform::from_label("LinkedIn").label(), "LinkedIn");
    }

    #[test]
    fn test_label_round_trip() {
        for label in ["Tutorial Blog", "Summary", "Note Taking", "Twitter"] {
            assert_eq!(Platform::from_label(label).label(), label);
        }
    }
}
