//! pathprobe: check which candidate paths exist under a base URL.
//!
//! ```text
//! pathprobe -u http://target.example -d admin.txt
//! ```
//!
//! Every candidate gets one console line; URLs answering 200 are appended
//! to the hits file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pathprobe::config::{load_config, ProbeConfig};
use pathprobe::lifecycle::{signals, Shutdown};
use pathprobe::observability::{logging, metrics};
use pathprobe::probe::ReqwestFetcher;
use pathprobe::scan;

#[derive(Parser)]
#[command(name = "pathprobe", version)]
#[command(about = "Probe a base URL for a list of candidate paths", long_about = None)]
struct Cli {
    /// Base URL to probe (e.g. http://example.com)
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// File with one candidate path per line [default: admin.txt]
    #[arg(short = 'd', long = "directories")]
    directories: Option<PathBuf>,

    /// File confirmed URLs are appended to [default: found_directories.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum probes in flight (0 = unbounded)
    #[arg(long)]
    max_in_flight: Option<usize>,

    /// Attempts per candidate on transport errors
    #[arg(long)]
    attempts: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl Cli {
    /// Command-line values take precedence over the config file.
    fn apply(self, config: &mut ProbeConfig) {
        if let Some(url) = self.url {
            config.target.base_url = Some(url);
        }
        if let Some(path) = self.directories {
            config.target.candidates_file = path.to_string_lossy().into_owned();
        }
        if let Some(path) = self.output {
            config.output.hits_file = path.to_string_lossy().into_owned();
        }
        if let Some(n) = self.max_in_flight {
            config.concurrency.max_in_flight = n;
        }
        if let Some(n) = self.attempts {
            config.retries.max_attempts = n;
        }
        if let Some(secs) = self.timeout {
            config.http.request_timeout_secs = Some(secs);
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut cli = Cli::parse();

    let mut config = match cli.config.take() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => ProbeConfig::default(),
    };
    cli.apply(&mut config);

    logging::init_logging(&config.observability.log_level);
    tracing::info!("pathprobe v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(addr) = &config.observability.metrics_address {
        match addr.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(metrics_address = %addr, error = %e, "Failed to parse metrics address"),
        }
    }

    let shutdown = Shutdown::new();
    signals::spawn_ctrl_c_handler(shutdown.clone());

    let fetcher = ReqwestFetcher::new(&config.http)?;
    let mut stdout = std::io::stdout();

    match scan::run(&config, fetcher, shutdown.signal(), &mut stdout).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
