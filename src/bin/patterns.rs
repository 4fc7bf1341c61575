// Runs the design pattern usage snippets.
//
//   cargo run --bin patterns                 # every pattern
//   cargo run --bin patterns -- observer     # just one
//   RUST_LOG=debug cargo run --bin patterns  # lifecycle events on stderr

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use design_patterns::demo::{self, Pattern};
use design_patterns::DemoConfig;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Runnable examples of classic design patterns.")]
struct Cli {
    /// Which pattern to run
    #[arg(value_enum, default_value_t = Pattern::All)]
    pattern: Pattern,

    /// TOML file overriding the demo inputs
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.pattern == Pattern::All {
        for (i, pattern) in Pattern::EACH.into_iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", format!("=== {} ===", pattern.title()).bold().cyan())?;
            demo::run(pattern, &config, &mut out)?;
        }
    } else {
        demo::run(cli.pattern, &config, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
