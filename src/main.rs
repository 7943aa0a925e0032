use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, error::ErrorKind};
use faculty_finder::{
    ClientConfig, HttpRecommendClient, InteractiveSearch, ResponseOrdering,
    config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, DEFAULT_TOP_K},
    interactive::{
        application::search_service::SearchService, constants::BACKEND_UNAVAILABLE_MESSAGE,
        domain::{models::SearchRequest, query::normalize},
    },
    logging::{LogTarget, init_tracing},
    output::{OutputFormat, OutputOptions, write_results},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "faculty-finder",
    version,
    about = "Find faculty members whose research matches an area of interest",
    long_about = None
)]
struct Cli {
    /// Research interest to search for (pre-fills the input in interactive mode)
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// Interactive search screen
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Base URL of the recommendation service
    #[arg(long, env = "FACULTY_FINDER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in milliseconds
    #[arg(long, env = "FACULTY_FINDER_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Maximum number of faculty to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Which response wins when searches overlap
    #[arg(long, value_enum, default_value = "latest")]
    response_order: ResponseOrdering,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show full biographies without truncation
    #[arg(long)]
    full_text: bool,

    /// Append diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = client_config(&cli)?;

    if cli.interactive {
        run_interactive(&cli, &config)
    } else {
        run_once(&cli, &config)
    }
}

fn client_config(cli: &Cli) -> Result<ClientConfig> {
    Ok(ClientConfig::new(&cli.api_url, cli.timeout_ms, cli.top_k)
        .context("Invalid client configuration")?
        .with_response_ordering(cli.response_order))
}

/// The trimmed one-shot query, or a usage error when it is blank.
fn one_shot_query(cli: &Cli) -> Result<String, clap::Error> {
    cli.query.as_deref().and_then(normalize).ok_or_else(|| {
        Cli::command().error(ErrorKind::InvalidValue, "the search query must not be empty")
    })
}

fn run_interactive(cli: &Cli, config: &ClientConfig) -> Result<()> {
    // The screen owns the terminal, so logs only go to an explicit file
    let target = match &cli.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    init_tracing(target, cli.verbose)?;

    let backend = HttpRecommendClient::new(config).context("Failed to build HTTP client")?;
    let mut interactive = InteractiveSearch::new(config, Arc::new(backend));
    interactive.run(cli.query.as_deref())
}

fn run_once(cli: &Cli, config: &ClientConfig) -> Result<()> {
    let target = match &cli.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    };
    init_tracing(target, cli.verbose)?;

    let query = one_shot_query(cli).unwrap_or_else(|e| e.exit());

    let backend = HttpRecommendClient::new(config).context("Failed to build HTTP client")?;
    let service = SearchService::new(Arc::new(backend));
    let request = SearchRequest {
        id: 1,
        query,
        top_k: config.top_k,
    };

    if cli.verbose {
        eprintln!("Searching: {}", config.recommend_endpoint());
        eprintln!("Query: {:?} (top {})", request.query, request.top_k);
    }

    let started = Instant::now();
    let records = match service.fetch(&request) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(query = %request.query, error = %e, "recommendation request failed");
            anyhow::bail!(BACKEND_UNAVAILABLE_MESSAGE);
        }
    };
    let elapsed = started.elapsed();

    tracing::info!(
        results = records.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "search settled"
    );

    let options = OutputOptions {
        format: cli.format,
        use_color: !cli.no_color,
        full_text: cli.full_text,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_results(&mut handle, &request.query, &records, elapsed, &options)?;
    handle.flush()?;

    Ok(())
}
