use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use proplens_scrapers::{PropertyScraper, ScrapeConfig, SiteRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a single listing URL and print the structured record
    #[command(about = "Scrape a single listing URL and print the structured record")]
    Scrape(ScrapeCommand),

    /// List the supported sites and their render modes
    #[command(about = "List the supported sites and their render modes")]
    Sites,
}

#[derive(Parser)]
struct ScrapeCommand {
    /// Listing URL to scrape
    url: String,

    /// Maximum concurrent headless browser sessions (-s, --max-sessions)
    #[arg(short = 's', long, default_value_t = 2)]
    max_sessions: usize,

    /// Timeout for static HTTP fetches, in seconds
    #[arg(long, default_value_t = 30)]
    static_timeout_secs: u64,

    /// Timeout for headless rendering, in seconds
    #[arg(long, default_value_t = 45)]
    headless_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape(cmd) => {
            let config = ScrapeConfig {
                max_headless_sessions: cmd.max_sessions,
                static_timeout: Duration::from_secs(cmd.static_timeout_secs),
                headless_timeout: Duration::from_secs(cmd.headless_timeout_secs),
                ..ScrapeConfig::default()
            };

            let scraper = PropertyScraper::new(config)?;
            let property = scraper.scrape_property(&cmd.url).await?;
            info!(url = %cmd.url, price = property.price, "scrape complete");
            println!("{}", serde_json::to_string_pretty(&property)?);
        }
        Commands::Sites => {
            for route in SiteRegistry::default().routes() {
                println!("{:<20} {:<12} {}", route.host, route.adapter.id(), route.mode);
            }
        }
    }

    Ok(())
}
