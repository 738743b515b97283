use anyhow::{Context, Result};
use clap::Parser;
use searcher::{resolve_config, run, OutputFormat, LAMBDA_ENV};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Rank documents against a query by smoothed query likelihood", long_about = None)]
struct Cli {
    /// Read the batch from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
    /// Jelinek-Mercer interpolation weight in [0, 1] (overrides QLM_LAMBDA and --config)
    #[arg(long)]
    lambda: Option<f64>,
    /// JSON config file, e.g. {"lambda": 0.7}
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let lambda_env = std::env::var(LAMBDA_ENV).ok();
    let config = resolve_config(cli.lambda, lambda_env.as_deref(), cli.config.as_deref())?;

    let output = match &cli.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening input {}", path.display()))?;
            run(BufReader::new(f), &config, cli.format)?
        }
        None => run(io::stdin().lock(), &config, cli.format)?,
    };
    println!("{output}");
    Ok(())
}
