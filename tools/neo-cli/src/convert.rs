use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::NeocartConfig;
use crate::pipeline::{self, ConvertOptions, Settings};

/// Arguments for the convert command
#[derive(Args)]
pub struct ConvertArgs {
    /// ROM archives (.zip) or unpacked ROM directories
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    #[command(flatten)]
    pub options: ConvertOptions,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs, config: &NeocartConfig) -> Result<()> {
    let settings = Settings::resolve(&args.options, config)?;

    println!(
        "Converting {} source(s) into {} (year {})",
        args.sources.len(),
        settings.out_dir.display(),
        settings.year
    );

    let reports = pipeline::run(&args.sources, &settings)?;
    let failed = pipeline::print_summary(&reports);
    if failed > 0 {
        anyhow::bail!("{} of {} conversions failed", failed, reports.len());
    }
    Ok(())
}
