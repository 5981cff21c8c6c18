use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transcript is empty - there is nothing to generate content from")]
    EmptyTranscript,

    #[error("no output formats selected")]
    NoPlatformsSelected,

    #[error("content generation failed: {0}")]
    Generation(String),
}
