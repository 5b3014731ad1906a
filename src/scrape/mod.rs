use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::fetch::{CookieJar, HttpFetcher, PageFetcher};
use crate::player;
use crate::transcript::{self, TranscriptRecord};
use crate::utils;

/// Drives one video through fetch → extract → select → fetch → assemble
///
/// Each run is self-contained; pipelines for different videos can execute
/// concurrently without coordination.
pub struct ScrapePipeline {
    config: Config,
    fetcher: Box<dyn PageFetcher>,
}

impl ScrapePipeline {
    /// Create a pipeline with an HTTP fetcher built from the config
    pub fn new(config: Config) -> Result<Self> {
        let cookies = match &config.http.cookies_file {
            Some(path) => Some(CookieJar::load(path)?),
            None => None,
        };

        let fetcher = HttpFetcher::new(&config.http, cookies)?;

        Ok(Self {
            config,
            fetcher: Box::new(fetcher),
        })
    }

    /// Create a pipeline over a caller-supplied fetch capability
    pub fn with_fetcher(config: Config, fetcher: Box<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Scrape the caption transcript for a single video page
    ///
    /// Any stage failure aborts the run for this video with a typed error;
    /// no partial record is produced.
    pub async fn scrape_from_url(&self, url: &str) -> Result<TranscriptRecord> {
        let url = utils::validate_and_normalize_url(url)?;

        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );

        progress.set_message("Fetching video page...");
        tracing::info!("Fetching video page: {}", url);
        let page = self.fetcher.fetch(&url).await?;

        let player_config = player::extract(&page.body)?;
        tracing::debug!(
            "Player config exposes {} caption tracks",
            player_config.caption_tracks.len()
        );

        let preferred = &self.config.scraper.preferred_languages;
        let track = player::select_track(&player_config.caption_tracks, preferred)?;

        if preferred.contains(&track.language_code) {
            tracing::info!("Found transcript for language: {}", track.language_code);
        } else {
            tracing::info!(
                "Using first available transcript language: {}",
                track.language_code
            );
        }

        progress.set_message("Downloading caption track...");
        let captions = self.fetcher.fetch(&track.base_url).await?;

        let video_url = self
            .config
            .scraper
            .echo_video_url
            .then(|| url.as_str());
        let record = transcript::assemble(&captions.body, video_url)?;

        progress.finish_with_message("Transcript extracted");
        tracing::info!(
            "Successfully extracted transcript with {} characters",
            record.character_count
        );

        Ok(record)
    }
}
