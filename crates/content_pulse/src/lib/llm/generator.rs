use std::{fmt::Debug, future::Future};

/// Seam over the hosted LLM service: one rendered prompt in, the full
/// accumulated response text out. Implementations hold their own credential;
/// the model identifier travels with each call because the caller picks it
/// per invocation.
pub trait Generator {
    /// Sampling temperature applied to every generation request.
    const TEMPERATURE: f32 = 0.7;

    type Error: Debug;

    fn generate(
        &self,
        prompt: &str,
        model: &str,
    ) -> impl Future<Output = Result<String, Self::Error>>;
}
