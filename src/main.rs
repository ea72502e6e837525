//! CLI entry point for the finite-fault wave aggregator.
//!
//! Provides subcommands for aggregating a directory of time-series files
//! into a station-keyed JSON document and for inspecting what a directory
//! scan would pick up.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use wave_aggregator::{
    aggregate::aggregate,
    discover::discover,
    model::Phase,
    output::write_json,
};

#[derive(Parser)]
#[command(name = "wave_aggregator")]
#[command(about = "Aggregates finite-fault seismic time series into JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a directory of finite-fault files into a JSON document
    Aggregate {
        /// Directory containing .dat/.syn time-series files
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        /// JSON file to write the aggregated document to
        #[arg(short, long, default_value = "timeseries.json")]
        output: PathBuf,
    },
    /// List the files a directory scan would pick up, without parsing them
    Inspect {
        /// Directory containing .dat/.syn time-series files
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/wave_aggregator.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("wave_aggregator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate { input_dir, output } => {
            let files = discover(&input_dir)?;
            info!(
                input_dir = %input_dir.display(),
                data_files = files.data_file_count(),
                "Directory scan complete"
            );

            let document = aggregate(&files)?;
            write_json(&output, &document)?;

            let entry_count: usize = document.values().map(|r| r.data.len()).sum();
            info!(
                stations = document.len(),
                entries = entry_count,
                output = %output.display(),
                "Aggregation complete"
            );
        }
        Commands::Inspect { input_dir } => {
            let files = discover(&input_dir)?;

            for phase in Phase::SCAN_ORDER {
                let lists = files.phase(phase);
                for path in &lists.data {
                    info!(phase = %phase, kind = "data", path = %path.display(), "File");
                }
                for path in &lists.synthetic {
                    info!(phase = %phase, kind = "synthetic", path = %path.display(), "File");
                }
                info!(
                    phase = %phase,
                    data_files = lists.data.len(),
                    synthetic_files = lists.synthetic.len(),
                    "Phase summary"
                );
            }

            info!(
                input_dir = %input_dir.display(),
                total_data_files = files.data_file_count(),
                "Scan summary"
            );
        }
    }

    Ok(())
}
