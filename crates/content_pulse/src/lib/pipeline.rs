pub mod builder;

use itertools::Itertools;

use crate::{
    error::Error,
    llm::{dispatcher::generate_for_platforms, generator::Generator},
    prompts,
    types::{ContentRequest, Platform, PlatformContent},
    yt::{self, TranscriptFetcher},
};

// The core video-to-content pipeline: resolve the video id, pull the caption
// transcript, then fan out one generation per requested output format.
#[derive(Debug)]
pub struct ContentPipeline<F, G>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    G: Generator + Send + Sync + 'static,
{
    fetcher: F,
    generator: G,
    languages: Vec<String>,
}

impl<F, G> ContentPipeline<F, G>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    G: Generator + Send + Sync + 'static,
{
    /// Fetches the caption transcript and flattens it into one
    /// whitespace-normalized string.
    ///
    /// Fail-soft: any fetch failure (no captions, video not found, transport
    /// error) is logged and collapsed into the empty string. Downstream only
    /// distinguishes "nothing to summarize", not why.
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript_text(&self, video_id: &str) -> String {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let raw = match self.fetcher.fetch_transcript(video_id, &languages).await {
            Ok(segments) => segments.iter().map(|segment| segment.text.as_str()).join(" "),
            Err(e) => {
                tracing::warn!(error = ?e, %video_id, "Failed to fetch transcript");
                String::new()
            }
        };

        yt::format_transcript(&raw)
    }

    /// Runs one full generation cycle and returns one result slot per
    /// requested platform, in request order.
    #[tracing::instrument(skip_all, fields(video = %request.video, model = %request.model))]
    pub async fn run(&self, request: &ContentRequest) -> Result<Vec<PlatformContent>, Error> {
        let video_id = yt::extract_video_id(&request.video);
        let transcript = self.fetch_transcript_text(video_id).await;

        generate_for_platforms(
            &self.generator,
            &transcript,
            &request.model,
            &request.platforms,
            request.user_query.as_deref(),
        )
        .await
    }

    /// Renders the exact prompts `run` would send, without calling the model.
    /// Subject to the same input guards as `run`.
    #[tracing::instrument(skip_all, fields(video = %request.video))]
    pub async fn preview_prompts(
        &self,
        request: &ContentRequest,
    ) -> Result<Vec<(Platform, String)>, Error> {
        let video_id = yt::extract_video_id(&request.video);
        let transcript = self.fetch_transcript_text(video_id).await;

        if transcript.is_empty() {
            return Err(Error::EmptyTranscript);
        }
        if request.platforms.is_empty() {
            return Err(Error::NoPlatformsSelected);
        }

        Ok(request
            .platforms
            .iter()
            .map(|platform| {
                let prompt =
                    prompts::build_prompt(platform, &transcript, request.user_query.as_deref());
                (platform.clone(), prompt)
            })
            .collect())
    }
}
