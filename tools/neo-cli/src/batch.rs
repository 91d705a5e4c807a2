//! Batch conversion of a ROM directory

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use neocart_shared::NEO_ROM_FORMAT;
use walkdir::WalkDir;

use crate::config::NeocartConfig;
use crate::pipeline::{self, ConvertOptions, Settings};

/// Arguments for the batch command
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing ROM archives
    pub input_dir: PathBuf,

    /// Also look in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    #[command(flatten)]
    pub options: ConvertOptions,
}

/// Execute the batch command
pub fn execute(args: BatchArgs, config: &NeocartConfig) -> Result<()> {
    if !args.input_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", args.input_dir.display());
    }

    let settings = Settings::resolve(&args.options, config)?;
    let archives = discover_archives(&args.input_dir, args.recursive);

    if archives.is_empty() {
        println!(
            "No .{} archives found in {}",
            NEO_ROM_FORMAT.archive_ext,
            args.input_dir.display()
        );
        return Ok(());
    }

    println!(
        "Converting {} archive(s) from {} into {} (year {})",
        archives.len(),
        args.input_dir.display(),
        settings.out_dir.display(),
        settings.year
    );

    let reports = pipeline::run(&archives, &settings)?;
    let failed = pipeline::print_summary(&reports);
    if failed > 0 {
        anyhow::bail!("{} of {} archives failed to convert", failed, reports.len());
    }
    Ok(())
}

/// ROM archives under `dir`, sorted by path.
pub fn discover_archives(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut archives: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_archive(path))
        .collect();

    archives.sort();
    archives
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NEO_ROM_FORMAT.archive_ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_discover_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("kof98.zip"));
        touch(&dir.path().join("MSLUG.ZIP"));
        touch(&dir.path().join("notes.txt"));
        std::fs::create_dir(dir.path().join("clones")).unwrap();
        touch(&dir.path().join("clones").join("kof98h.zip"));

        let found = discover_archives(dir.path(), false);
        assert_eq!(
            found,
            vec![dir.path().join("MSLUG.ZIP"), dir.path().join("kof98.zip")]
        );
    }

    #[test]
    fn test_discover_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("kof98.zip"));
        std::fs::create_dir(dir.path().join("clones")).unwrap();
        touch(&dir.path().join("clones").join("kof98h.zip"));

        let found = discover_archives(dir.path(), true);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&dir.path().join("clones").join("kof98h.zip")));
    }

    #[test]
    fn test_directory_named_like_archive_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("fake.zip")).unwrap();
        assert!(discover_archives(dir.path(), false).is_empty());
    }
}
