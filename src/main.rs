// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use superstring_search::cli::{run, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}
