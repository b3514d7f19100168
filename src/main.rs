//! H2Oil Well Profile - trajectory analysis service
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP service (default subcommand)
//! h2oil-wellprofile serve --config wellprofile.toml --addr 0.0.0.0:8000
//!
//! # Analyze a survey file, or stdin with `-`
//! h2oil-wellprofile analyze --input survey.json --pretty
//! cat survey.json | h2oil-wellprofile analyze --report
//! ```
//!
//! # Environment Variables
//!
//! - `WELLPROFILE_CONFIG`: Path to the service TOML file
//! - `WELLPROFILE_ADDR`: Override the bind address
//! - `RUST_LOG`: Logging level (default: info)
//! - `LOG_FORMAT`: Set to `json` for JSON log lines

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use h2oil_wellprofile::api::{create_app, AppState};
use h2oil_wellprofile::config::ServiceConfig;
use h2oil_wellprofile::trajectory;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "h2oil-wellprofile")]
#[command(about = "Well trajectory analysis service")]
#[command(version)]
struct CliArgs {
    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP service
    Serve {
        /// Path to the service TOML file (overrides WELLPROFILE_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the server address (default: "0.0.0.0:8000")
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Analyze a survey from a JSON file and print the result
    Analyze {
        /// JSON file with a point array or trajectory object; `-` reads stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Print the full report (DLS series and warnings) instead of the summary statistics
        #[arg(long)]
        report: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

// ============================================================================
// Logging
// ============================================================================

/// Logs go to stderr so `analyze` output on stdout stays pipeable.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ============================================================================
// Config
// ============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<ServiceConfig> {
    match path {
        Some(p) => ServiceConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(ServiceConfig::load()),
    }
}

// ============================================================================
// Subcommands
// ============================================================================

async fn run_server(mut config: ServiceConfig, addr: Option<String>) -> Result<()> {
    config.apply_addr_override(addr);
    config.validate().context("Invalid service configuration")?;
    let socket_addr = config.socket_addr()?;

    info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting service"
    );

    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(socket_addr)
        .await
        .with_context(|| format!("Failed to bind to {socket_addr}"))?;
    info!(%socket_addr, "HTTP server listening");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, shutting down");
        shutdown_token.cancel();
    });

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await;

    match result {
        Ok(()) => {
            info!("Shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("HTTP server error: {}", e);
            Err(anyhow::anyhow!("HTTP server error: {e}"))
        }
    }
}

fn run_analyze(input: &str, full_report: bool, pretty: bool) -> Result<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read survey from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
    };

    let well = trajectory::parse_trajectory_json(&text).context("Invalid survey input")?;
    let report = trajectory::analyze_report(&well.points).context("Analysis failed")?;
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    info!(
        points = report.analysis.point_count,
        max_dls = report.analysis.max_dls,
        "Trajectory analyzed"
    );

    let output = match (full_report, pretty) {
        (true, true) => serde_json::to_string_pretty(&report)?,
        (true, false) => serde_json::to_string(&report)?,
        (false, true) => serde_json::to_string_pretty(&report.analysis)?,
        (false, false) => serde_json::to_string(&report.analysis)?,
    };
    println!("{output}");
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();

    match args.command {
        Some(SubCommand::Analyze {
            input,
            report,
            pretty,
        }) => run_analyze(&input, report, pretty),
        Some(SubCommand::Serve { config, addr }) => {
            run_server(load_config(config.as_ref())?, addr).await
        }
        None => run_server(load_config(None)?, None).await,
    }
}
