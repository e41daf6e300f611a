// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use threat_intel_hub::utils::logging::{format_info, format_step, format_success, format_warning};
use threat_intel_hub::{
    Article, Config, ExtractionResult, FeedFetcher, IocExtractor, JsonExporter, OllamaClient,
    ProgressTracker, Validator,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "threat_intel_hub")]
#[command(version = "0.1.0")]
#[command(about = "Threat intelligence feed aggregation with IOC extraction", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch configured feeds and list the collected articles
    Fetch {
        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Fetch feeds and run full analysis on one article
    Analyze {
        /// Article index in the fetched list (newest first)
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        #[arg(long)]
        no_summary: bool,
    },

    /// Extract indicators from a local file, or stdin when no file is given
    Extract {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Fetch all feeds, extract indicators, and export JSON analyses
    Export {
        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,

        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// List configured feed sources
    Feeds,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    threat_intel_hub::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Threat Intelligence Hub");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Fetch { limit } => {
            cmd_fetch(&config, limit).await?;
        }
        Commands::Analyze { index, no_summary } => {
            cmd_analyze(&config, index, no_summary).await?;
        }
        Commands::Extract { file, pretty } => {
            cmd_extract(&config, file, pretty)?;
        }
        Commands::Export {
            output,
            pretty,
            limit,
        } => {
            cmd_export(&config, output, pretty, limit).await?;
        }
        Commands::Feeds => {
            cmd_feeds(&config);
        }
    }

    Ok(())
}

async fn fetch_articles(config: &Config) -> Result<Vec<Article>> {
    let fetcher = FeedFetcher::new(config.feeds.clone()).context("Failed to create feed fetcher")?;

    let tracker = ProgressTracker::with_color(fetcher.source_count(), true);
    let articles = fetcher.fetch_all(Some(&tracker)).await;
    tracker.finish();

    let stats = tracker.get_stats();
    info!(
        "Fetched {} articles from {} feeds ({} failed) in {}s",
        stats.articles_collected, stats.feeds_fetched, stats.feeds_failed, stats.duration_secs
    );

    Ok(articles)
}

async fn cmd_fetch(config: &Config, limit: Option<usize>) -> Result<()> {
    let articles = fetch_articles(config).await?;

    if articles.is_empty() {
        println!("{}", format_warning("No articles found. Check feed URLs or network connection."));
        return Ok(());
    }

    let shown = limit.unwrap_or(articles.len()).min(articles.len());
    for (idx, article) in articles.iter().take(shown).enumerate() {
        println!("{:3}. {}", idx, article.display_label());
    }

    println!("{}", format_success(&format!("{} threat reports loaded", articles.len())));
    Ok(())
}

async fn cmd_analyze(config: &Config, index: usize, no_summary: bool) -> Result<()> {
    let articles = fetch_articles(config).await?;

    let article = articles
        .get(index)
        .with_context(|| format!("No article at index {} ({} fetched)", index, articles.len()))?;

    info!("Analyzing: {}", article.title);

    println!("\n{}", article.display_label());
    println!("{}\n", article.link);

    if !no_summary {
        let client = OllamaClient::new(config.summarizer.clone());
        println!("{}", format_info(&format!("Generating summary with model `{}`", client.model())));

        match client.summarize(&article.content).await {
            Ok(summary) => println!("\n{}\n", summary),
            Err(e) => {
                warn!("Summarization failed: {}", e);
                println!("\n{}\n", client.failure_notice());
            }
        }
    }

    let extractor = IocExtractor::with_allowlist(config.extraction.allowlist_set());
    let indicators = extractor.extract(&article.content);

    print_indicators(&indicators, true)?;
    Ok(())
}

fn cmd_extract(config: &Config, file: Option<PathBuf>, pretty: bool) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if Validator::validate_content_not_empty(&content).is_err() {
        warn!("Input is empty; extraction will yield no indicators");
    }

    let extractor = IocExtractor::with_allowlist(config.extraction.allowlist_set());
    let indicators = extractor.extract(&content);

    print_indicators(&indicators, pretty)?;
    Ok(())
}

async fn cmd_export(
    config: &Config,
    output: PathBuf,
    pretty: bool,
    limit: Option<usize>,
) -> Result<()> {
    let start_time = Instant::now();
    let articles = fetch_articles(config).await?;

    let articles: Vec<Article> = match limit {
        Some(limit) => articles.into_iter().take(limit).collect(),
        None => articles,
    };

    let extractor = IocExtractor::with_allowlist(config.extraction.allowlist_set());
    let total = articles.len();

    let mut analyses: Vec<(Article, ExtractionResult)> = Vec::with_capacity(total);
    for (idx, article) in articles.into_iter().enumerate() {
        let indicators = extractor.extract(&article.content);
        println!(
            "{}",
            format_step(idx + 1, total, &format!("{}: {}", article.title, indicators.summary()))
        );
        analyses.push((article, indicators));
    }

    let exporter = JsonExporter::new(output).context("Failed to create export directory")?;
    let manifest = exporter.export_all(&analyses, pretty)?;

    let elapsed = start_time.elapsed();
    println!(
        "{}",
        format_success(&format!(
            "Exported {} analyses ({} indicators) in {:.2}s",
            manifest.total_articles,
            manifest.total_indicators,
            elapsed.as_secs_f64()
        ))
    );
    Ok(())
}

fn cmd_feeds(config: &Config) {
    for url in &config.feeds.sources {
        println!("{}", url);
    }
    println!("{}", format_info(&format!("{} feeds configured", config.feeds.sources.len())));
}

fn print_indicators(indicators: &ExtractionResult, pretty: bool) -> Result<()> {
    println!("{}", format_success(&indicators.summary()));

    let payload = if pretty {
        serde_json::to_string_pretty(indicators)?
    } else {
        serde_json::to_string(indicators)?
    };
    println!("{}", payload);
    Ok(())
}
