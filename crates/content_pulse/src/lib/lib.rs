mod error;
mod llm;
pub mod parser;
mod pipeline;
pub mod prompts;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::gemini;
pub use llm::{
    dispatcher::generate_for_platforms,
    gemini::{GeminiClient, GeminiError},
    generator::Generator,
};
pub use pipeline::{builder::ContentPipelineBuilder, ContentPipeline};
pub use types::{ContentRequest, Platform, PlatformContent};
pub use yt::{captions::CaptionFetcher, TranscriptFetcher, TranscriptSegment};
