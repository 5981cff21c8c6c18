use crate::{llm::generator::Generator, yt::TranscriptFetcher, ContentPipeline};

pub struct ContentPipelineBuilder<F = (), G = ()> {
    fetcher: F,
    generator: G,
    languages: Vec<String>,
}

impl ContentPipelineBuilder {
    pub fn new() -> Self {
        Self {
            fetcher: (),
            generator: (),
            languages: vec!["en".to_string()],
        }
    }
}

impl Default for ContentPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, G> ContentPipelineBuilder<F, G> {
    pub fn transcript_fetcher<F2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> ContentPipelineBuilder<F2, G> {
        ContentPipelineBuilder {
            fetcher,
            generator: self.generator,
            languages: self.languages,
        }
    }

    pub fn generator<G2: Generator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> ContentPipelineBuilder<F, G2> {
        ContentPipelineBuilder {
            fetcher: self.fetcher,
            generator,
            languages: self.languages,
        }
    }

    /// Preferred transcript languages, in order of preference.
    pub fn languages(mut self, languages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }
}

impl<F, G> ContentPipelineBuilder<F, G>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    G: Generator + Send + Sync + 'static,
{
    pub fn build(self) -> ContentPipeline<F, G> {
        ContentPipeline {
            fetcher: self.fetcher,
            generator: self.generator,
            languages: self.languages,
        }
    }
}
