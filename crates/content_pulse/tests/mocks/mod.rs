pub mod generator;
pub mod transcript_fetcher;
