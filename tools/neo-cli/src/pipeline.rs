//! Shared conversion driver for the convert and batch commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use neo_common::{
    cartridge_name, convert_one, output_path, AtomicFileWriter, ConvertError, IntakeFilter,
    SourceExtractor,
};
use rayon::prelude::*;
use tracing::info;

use crate::config::NeocartConfig;

/// Options shared by every converting command
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output directory for .neo images (default: config output_dir, then current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Year written into the header (default: current year)
    #[arg(long)]
    pub year: Option<u32>,

    /// Skip archive files whose name contains PATTERN (repeatable, replaces the default .html)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Keep existing .neo images instead of replacing them
    #[arg(long)]
    pub skip_existing: bool,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// Fully resolved conversion settings (flags > config > defaults)
#[derive(Debug, Clone)]
pub struct Settings {
    pub out_dir: PathBuf,
    pub year: u32,
    pub filter: IntakeFilter,
    pub overwrite: bool,
    pub jobs: Option<usize>,
}

impl Settings {
    pub fn resolve(options: &ConvertOptions, config: &NeocartConfig) -> Result<Self> {
        let section = &config.convert;

        let out_dir = options
            .output
            .clone()
            .or_else(|| section.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let year = match options.year.or(section.year) {
            Some(year) => year,
            None => current_year()?,
        };

        let filter = if !options.exclude.is_empty() {
            IntakeFilter::new(options.exclude.iter().cloned())
        } else if let Some(exclude) = &section.exclude {
            IntakeFilter::new(exclude.iter().cloned())
        } else {
            IntakeFilter::default()
        };

        let overwrite = !options.skip_existing && section.overwrite.unwrap_or(true);

        if options.jobs == Some(0) {
            anyhow::bail!("--jobs must be at least 1");
        }

        Ok(Self {
            out_dir,
            year,
            filter,
            overwrite,
            jobs: options.jobs,
        })
    }
}

/// Current calendar year from the local clock.
pub fn current_year() -> Result<u32> {
    u32::try_from(chrono::Local::now().year()).context("System clock reports a negative year")
}

/// What happened to one source
#[derive(Debug)]
pub enum Outcome {
    Converted(PathBuf),
    Skipped(PathBuf),
}

#[derive(Debug)]
pub struct Report {
    pub source: PathBuf,
    pub result: Result<Outcome, ConvertError>,
}

/// Convert every source independently, in parallel.
///
/// Per-source failures are collected in the reports, never short-circuit.
pub fn run(sources: &[PathBuf], settings: &Settings) -> Result<Vec<Report>> {
    std::fs::create_dir_all(&settings.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            settings.out_dir.display()
        )
    })?;

    let extractor = SourceExtractor::new(settings.filter.clone());
    let convert = |source: &PathBuf| Report {
        source: source.clone(),
        result: convert_source(source, settings, &extractor),
    };

    let reports: Vec<Report> = match settings.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| sources.par_iter().map(convert).collect())
        }
        None => sources.par_iter().map(convert).collect(),
    };

    Ok(reports)
}

fn convert_source(
    source: &Path,
    settings: &Settings,
    extractor: &SourceExtractor,
) -> Result<Outcome, ConvertError> {
    if !settings.overwrite {
        let existing = output_path(&settings.out_dir, &cartridge_name(source)?);
        if existing.exists() {
            info!("Skipping {} ({} exists)", source.display(), existing.display());
            return Ok(Outcome::Skipped(existing));
        }
    }

    let path = convert_one(
        source,
        &settings.out_dir,
        extractor,
        &AtomicFileWriter,
        settings.year,
    )?;
    Ok(Outcome::Converted(path))
}

/// Print one line per source plus totals. Returns the number of failures.
pub fn print_summary(reports: &[Report]) -> usize {
    let mut converted = 0;
    let mut skipped = 0;
    let mut failed = 0;

    println!();
    for report in reports {
        match &report.result {
            Ok(Outcome::Converted(path)) => {
                converted += 1;
                let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                println!(
                    "  OK    {} -> {} ({} bytes)",
                    report.source.display(),
                    path.display(),
                    size
                );
            }
            Ok(Outcome::Skipped(path)) => {
                skipped += 1;
                println!(
                    "  SKIP  {} ({} exists)",
                    report.source.display(),
                    path.display()
                );
            }
            Err(err) => {
                failed += 1;
                println!("  FAIL  {}: {}", report.source.display(), err);
            }
        }
    }

    println!();
    println!(
        "Converted: {}, skipped: {}, failed: {}",
        converted, skipped, failed
    );
    failed
}
