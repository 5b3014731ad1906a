use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tscrape",
    about = "Transcript Scraper - Extract caption transcripts from video pages",
    version,
    long_about = "A CLI tool for extracting spoken-word transcripts from video pages. Locates the embedded player configuration, picks a caption track by language preference, and normalizes the track's timed text into a single transcript."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the caption transcript from a video page URL
    Scrape {
        /// Video page URL to scrape
        #[arg(value_name = "URL")]
        url: String,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Preferred caption languages in priority order (overrides config)
        #[arg(short, long, value_name = "LANGS", value_delimiter = ',')]
        languages: Vec<String>,

        /// Netscape-format cookie file to send with requests (overrides config)
        #[arg(long, value_name = "FILE")]
        cookies: Option<PathBuf>,

        /// Leave the source video URL out of the transcript record
        #[arg(long)]
        omit_url: bool,
    },

    /// Show or locate the scraper configuration
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Plain transcript text
    Text,
    /// JSON record with counts
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
