//! scrape - command-line interface for scrapekit

mod config;

use clap::{Args, Parser, Subcommand};
use config::{Config, ConfigError};
use scrapekit::{create_article_scraper, create_link_scraper, LinkMap, ScrapeError, Source};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Only supported article output format
const FORMAT_MARKDOWN: &str = "markdown";

/// A CLI tool to scrape links and articles
#[derive(Parser, Debug)]
#[command(name = "scrape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default is $HOME/.scrape.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape an article as Markdown
    Article(ArticleArgs),
    /// Scrape the title of an article
    Title(TargetArgs),
    /// Scrape the title of an article as a filename
    Filename(TargetArgs),
    /// Scrape article links from an index page
    Links(TargetArgs),
}

/// Site and page to scrape
#[derive(Args, Debug, Clone)]
struct TargetArgs {
    /// Source type (guardian, microsoft, go, tofugu)
    #[arg(long)]
    source: String,

    /// URL of the page to scrape
    #[arg(long, short)]
    url: String,
}

#[derive(Args, Debug, Clone)]
struct ArticleArgs {
    /// Output format (markdown)
    #[arg(long, default_value = FORMAT_MARKDOWN)]
    format: String,

    #[command(flatten)]
    target: TargetArgs,
}

/// Errors surfaced by the CLI
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid source: {0}")]
    InvalidSource(String),

    #[error("url is required")]
    MissingUrl,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("error creating scraper: {0}")]
    CreateScraper(#[source] ScrapeError),

    #[error("{context}: {source}")]
    Scrape {
        context: &'static str,
        #[source]
        source: ScrapeError,
    },
}

impl CliError {
    fn scrape(context: &'static str) -> impl FnOnce(ScrapeError) -> Self {
        move |source| CliError::Scrape { context, source }
    }
}

impl TargetArgs {
    /// Check the source against `accepts`, then require a URL
    fn validate(&self, accepts: impl Fn(Source) -> bool) -> Result<(), CliError> {
        match Source::from_str(&self.source) {
            Ok(source) if accepts(source) => {}
            _ => return Err(CliError::InvalidSource(self.source.clone())),
        }

        if self.url.is_empty() {
            return Err(CliError::MissingUrl);
        }

        Ok(())
    }
}

impl Commands {
    /// Validate options before any network activity
    ///
    /// Order: format (article only), then source, then url.
    fn validate(&self) -> Result<(), CliError> {
        match self {
            Commands::Article(args) => {
                if args.format != FORMAT_MARKDOWN {
                    return Err(CliError::InvalidFormat(args.format.clone()));
                }
                args.target.validate(|_| true)
            }
            Commands::Title(target) | Commands::Filename(target) => target.validate(|_| true),
            Commands::Links(target) => target.validate(|source| source.supports_links()),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    cli.command.validate()?;

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");
    let options = config.fetch_options();

    match cli.command {
        Commands::Article(args) => {
            let scraper = create_article_scraper(&args.target.source, options)
                .map_err(CliError::CreateScraper)?;
            let markdown = scraper
                .scrape_article(&args.target.url)
                .await
                .map_err(CliError::scrape("error scraping article"))?;
            writeln_safe(&markdown);
        }
        Commands::Title(target) => {
            let scraper =
                create_article_scraper(&target.source, options).map_err(CliError::CreateScraper)?;
            let title = scraper
                .scrape_title(&target.url)
                .await
                .map_err(CliError::scrape("error scraping title of article"))?;
            writeln_safe(&title);
        }
        Commands::Filename(target) => {
            let scraper =
                create_article_scraper(&target.source, options).map_err(CliError::CreateScraper)?;
            let filename = scraper
                .scrape_filename(&target.url)
                .await
                .map_err(CliError::scrape("error scraping filename of article"))?;
            writeln_safe(&filename);
        }
        Commands::Links(target) => {
            let scraper =
                create_link_scraper(&target.source, options).map_err(CliError::CreateScraper)?;
            let links = scraper
                .scrape_links(&target.url)
                .await
                .map_err(CliError::scrape("error scraping links"))?;
            write_safe(&format_links(&links));
        }
    }

    Ok(())
}

/// One `[label](url)` line per link
fn format_links(links: &LinkMap) -> String {
    links
        .iter()
        .map(|(label, url)| format!("[{}]({})\n", label, url))
        .collect()
}

/// Write a line to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    write_safe(&format!("{}\n", s));
}

/// Write to stdout, exit silently on broken pipe
fn write_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = handle.write_all(s.as_bytes()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
