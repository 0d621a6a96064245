//! # Profile Editor Host
//!
//! Entry point for the profile editor host.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use profiled::{HostConfig, HostError, HostRuntime};
use tracing_subscriber::EnvFilter;

/// Profile editor host: applies editing commands to a stored profile
#[derive(Parser, Debug)]
#[command(name = "profiled")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the stored profile and theme preference
    #[arg(long, default_value = ".profiled")]
    data_dir: PathBuf,

    /// Command script to run instead of reading stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Startup query string, e.g. `mode=admin`
    #[arg(long, default_value = "")]
    query: String,

    /// Use the dark theme when no preference is stored
    #[arg(long)]
    prefer_dark: bool,

    /// Address copied by `share`
    #[arg(long, default_value = "http://localhost/")]
    share_url: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("profiled=info,profile_session=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "host stopped");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), HostError> {
    let config = HostConfig {
        data_dir: args.data_dir,
        query: args.query,
        prefer_dark: args.prefer_dark,
        share_url: args.share_url,
    };
    let mut runtime = HostRuntime::new(config)?;
    let mut stdout = io::stdout().lock();

    match args.script {
        Some(path) => {
            let file = File::open(&path)?;
            tracing::info!(script = %path.display(), "running script");
            runtime.run(BufReader::new(file), &mut stdout)
        }
        None => runtime.run(io::stdin().lock(), &mut stdout),
    }
}
