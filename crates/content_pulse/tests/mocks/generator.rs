use std::sync::{Arc, Mutex};

use content_pulse::Generator;

#[derive(Clone, Default)]
pub struct MockGenerator {
    pub response: String,
    /// Echo each prompt back as the generated content instead of `response`.
    pub echo: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Zero-based call indices that should fail.
    pub fail_on_calls: Vec<usize>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            ..Default::default()
        }
    }

    /// Returns the rendered prompt as the generation result, which lets tests
    /// assert on which template each slot was built from.
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_calls.push(call);
        self
    }
}

impl Generator for MockGenerator {
    type Error = anyhow::Error;

    async fn generate(&self, prompt: &str, _model: &str) -> Result<String, Self::Error> {
        let call_idx = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            calls.len() - 1
        };

        if self.fail_on_calls.contains(&call_idx) {
            anyhow::bail!("mock generation failure on call {call_idx}");
        }

        if self.echo {
            Ok(prompt.to_string())
        } else {
            Ok(self.response.clone())
        }
    }
}
