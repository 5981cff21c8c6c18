use futures::future::join_all;

use crate::{
    error::Error,
    llm::generator::Generator,
    prompts,
    types::{Platform, PlatformContent},
};

/// Fans out one generation per requested platform and joins on all of them.
///
/// Results come back positionally aligned with `platforms` regardless of
/// completion order, one slot per request. A failed generation occupies its
/// own slot as an error and never cancels its siblings. The guards run before
/// any task is created, so an invalid request costs no network calls.
#[tracing::instrument(skip_all, fields(platforms = platforms.len(), %model))]
pub async fn generate_for_platforms<G>(
    generator: &G,
    transcript: &str,
    model: &str,
    platforms: &[Platform],
    user_query: Option<&str>,
) -> Result<Vec<PlatformContent>, Error>
where
    G: Generator,
{
    if transcript.trim().is_empty() {
        return Err(Error::EmptyTranscript);
    }
    if platforms.is_empty() {
        return Err(Error::NoPlatformsSelected);
    }

    let tasks = platforms.iter().map(|platform| {
        let prompt = prompts::build_prompt(platform, transcript, user_query);
        async move {
            let result = generator
                .generate(&prompt, model)
                .await
                .map(|text| text.trim().to_string())
                .map_err(|e| Error::Generation(format!("{e:?}")));

            if let Err(ref e) = result {
                tracing::error!(%platform, error = %e, "Generation failed for platform");
            }

            PlatformContent {
                platform: platform.clone(),
                result,
            }
        }
    });

    Ok(join_all(tasks).await)
}
