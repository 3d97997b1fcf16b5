mod browser;
mod config;
mod error;
mod parser;
mod pipeline;
mod records;
mod server;

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

use config::ScrapeConfig;
use pipeline::ExtractionPipeline;

#[derive(Parser)]
#[command(name = "dbf_scraper", about = "DBF Viewer 2000 release-notes scraper via headless Chrome")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the news page once and print the version entries
    Scrape {
        /// Page to scrape
        #[arg(long, default_value = config::DEFAULT_TARGET_URL)]
        url: String,
        /// Run Chrome with a visible window
        #[arg(long)]
        headed: bool,
        /// Readiness wait bound in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Expose the scraper as an HTTP endpoint (GET /scrape?url=...)
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        /// Run Chrome with a visible window
        #[arg(long)]
        headed: bool,
        /// Readiness wait bound in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scrape {
            url,
            headed,
            timeout,
            json,
        } => {
            let config = ScrapeConfig::new(!headed, Duration::from_secs(timeout));
            let pipeline = ExtractionPipeline::new(config);
            let records = pipeline.scrape(&url).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("No version entries found on {}", url);
            } else {
                println!("{:>3} | {:<10} | {:<18} | URL", "#", "Version", "Date");
                println!("{}", "-".repeat(72));
                for (i, r) in records.iter().enumerate() {
                    println!(
                        "{:>3} | {:<10} | {:<18} | {}",
                        i + 1,
                        r.version,
                        truncate(&r.date, 18),
                        r.url
                    );
                }
                println!("\n{} version entries", records.len());
            }
            Ok(())
        }
        Commands::Serve {
            port,
            headed,
            timeout,
        } => {
            let config = ScrapeConfig::new(!headed, Duration::from_secs(timeout));
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            server::serve(addr, config).await
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
