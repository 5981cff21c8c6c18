use anyhow::Context;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::yt::{TranscriptFetcher, TranscriptSegment};

/// Caption-track transcript source backed by `yt-transcript-rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionFetcher;

impl TranscriptFetcher for CaptionFetcher {
    type Error = anyhow::Error;

    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, Self::Error> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .context("Failed to create YouTube transcript client")?;

        let transcript = api
            .fetch_transcript(video_id, languages, false)
            .await
            .with_context(|| format!("Failed to fetch transcript for {video_id}"))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}
