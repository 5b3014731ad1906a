//! Transcript Scraper - A Rust CLI tool for scraping caption transcripts from video pages
//!
//! This library extracts the embedded player configuration from a fetched video page,
//! selects one caption track according to a language-preference policy, and assembles
//! the track's timed-text XML into a single normalized transcript record.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod output;
pub mod player;
pub mod scrape;
pub mod transcript;
pub mod utils;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use fetch::{FetchedDocument, PageFetcher};
pub use player::{CaptionTrack, PlayerConfig};
pub use scrape::ScrapePipeline;
pub use transcript::TranscriptRecord;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error kinds produced by the scraping pipeline
///
/// Each variant is terminal for the video being processed; retrying is the
/// caller's decision, never the pipeline's.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("Player config marker not found in page body")]
    MarkerNotFound,

    #[error("Embedded player config failed to parse: {0}")]
    MalformedPayload(String),

    #[error("No caption tracks present in player config")]
    NoCaptionTracks,

    #[error("Caption track list is empty")]
    EmptySourceList,

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("No text fragments found in caption track document")]
    NoTextFragments,
}
