use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_scraper::output;
use transcript_scraper::{Cli, Commands, Config, ScrapePipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "transcript_scraper=debug,tscrape=debug"
    } else {
        "transcript_scraper=info,tscrape=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().await?;

    match cli.command {
        Commands::Scrape {
            url,
            output,
            format,
            languages,
            cookies,
            omit_url,
        } => {
            // Per-invocation overrides of the config file
            if !languages.is_empty() {
                config.scraper.preferred_languages = languages;
            }
            if let Some(path) = cookies {
                config.http.cookies_file = Some(path);
            }
            if omit_url {
                config.scraper.echo_video_url = false;
            }

            let pipeline = ScrapePipeline::new(config)?;

            tracing::info!("Starting transcript scrape for URL: {}", url);

            let record = pipeline.scrape_from_url(&url).await?;

            match output {
                Some(path) => {
                    output::save_to_file(&record, &path, &format).await?;
                    println!("Transcript saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&record, &format)?;
                }
            }
        }
        Commands::Config { show } => {
            if show {
                config.display();
            } else {
                println!("Configuration file:");
                println!("  {}", Config::config_path()?.display());
                println!("Edit it directly, or rerun with --show to inspect current values.");
            }
        }
    }

    Ok(())
}
