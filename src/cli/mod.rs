// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line driver.
//!
//! Reads a YAML configuration, removes contained inners, searches all
//! orderings and writes the shortest merge to the given output. The binary
//! only sets up logging and calls [`run`].

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pprof::protos::Message;
use pprof::ProfilerGuard;
use tracing::info;

use crate::engine::{SearchEngine, SearchObserver};
use crate::inner::{Inner, InnerArena};
use crate::report::Report;
use crate::state::MergedInners;
use crate::{preprocess, Config};

/// Samples per second taken by the CPU profiler.
const PROFILE_FREQUENCY: i32 = 1000;

#[derive(Debug, Parser)]
#[command(name = "superstring")]
#[command(about = "Find the shortest string containing every configured inner")]
pub struct Cli {
    /// YAML file with maxResultSize and knownInners.
    #[arg(long, default_value = "combinations.yaml")]
    pub filename: PathBuf,

    /// Memoize overlap offsets between pairs of inners.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub enable_merge_cache: bool,

    /// Bytes per word when splitting the result string (0: no split).
    #[arg(long, default_value_t = 5)]
    pub word_size: usize,

    /// Write a pprof CPU profile of the search to this file.
    #[arg(long)]
    pub cpuprofile: Option<PathBuf>,
}

/// Logs the full report for every improvement.
struct ReportObserver<'a> {
    arena: &'a InnerArena,
    word_size: usize,
}

impl SearchObserver for ReportObserver<'_> {
    fn on_new_result(&mut self, result: &MergedInners, inners: &[&Inner]) {
        let report = Report::new(result, inners, self.arena);
        info!("new result: {}", report.render(self.word_size));
    }

    fn on_progress(&mut self, percent: u32) {
        info!("{}% done", percent);
    }
}

/// Run one search as configured by `cli`, writing the summary to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = Config::from_path(&cli.filename)
        .with_context(|| format!("failed to load {}", cli.filename.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid configuration in {}", cli.filename.display()))?;
    info!("input({}): {:?}", config.known_inners.len(), config);

    let max_result_size = config.result_size();
    let mut arena = config.into_arena();
    let reduced = preprocess::reduce(&mut arena);
    let inners = arena.select(&reduced);
    info!(
        searched = inners.len(),
        absorbed = arena.len() - inners.len(),
        "preprocessing done"
    );

    let mut engine = SearchEngine::with_merge_cache(cli.enable_merge_cache);
    let mut observer = ReportObserver {
        arena: &arena,
        word_size: cli.word_size,
    };

    let profiler = match &cli.cpuprofile {
        Some(_) => Some(
            ProfilerGuard::new(PROFILE_FREQUENCY).context("failed to start CPU profiler")?,
        ),
        None => None,
    };

    let started = Instant::now();
    let result = engine.search_with_observer(&inners, max_result_size, &mut observer);
    writeln!(out, "calculation took {:?}", started.elapsed())?;

    if let (Some(guard), Some(path)) = (profiler, &cli.cpuprofile) {
        write_profile(&guard, path)
            .with_context(|| format!("failed to write CPU profile to {}", path.display()))?;
    }

    let report = Report::new(&result, &inners, &arena);
    writeln!(
        out,
        "result of size {}:\n{}",
        result.len(),
        report.render(cli.word_size)
    )?;
    Ok(())
}

fn write_profile(guard: &ProfilerGuard<'_>, path: &Path) -> Result<()> {
    let profile = guard.report().build()?.pprof()?;
    let mut content = Vec::new();
    profile.encode(&mut content)?;
    fs::write(path, content)?;
    Ok(())
}
