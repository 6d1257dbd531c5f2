mod error;
mod logic;
mod numbers;

use clap::Parser;
use error::{Error, Result};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "complex-sum")]
#[command(about = "Adds two fixed complex number pairs and prints the sums", version, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose { "debug" } else { &cli.log_level };
    let filter = EnvFilter::try_new(level).map_err(|e| Error::Logging(e.to_string()))?;

    // Stdout only carries the sums
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn run(cli: &Cli) -> Result<()> {
    init_logging(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    logic::run(&mut out)
}

pub fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("complex-sum: {}", e);
        process::exit(e.exit_code());
    }
}
