use std::sync::{Arc, Mutex};

use content_pulse::{TranscriptFetcher, TranscriptSegment};

#[derive(Clone, Default)]
pub struct MockTranscriptFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            segments: texts
                .iter()
                .enumerate()
                .map(|(i, text)| TranscriptSegment {
                    text: text.to_string(),
                    start: i as f64,
                    duration: 1.0,
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    type Error = anyhow::Error;

    async fn fetch_transcript(
        &self,
        video_id: &str,
        _languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, Self::Error> {
        self.calls.lock().unwrap().push(video_id.to_string());

        if let Some(ref msg) = self.fail_with {
            anyhow::bail!("{}", msg);
        }

        Ok(self.segments.clone())
    }
}
