//! Loading ROM file sets from archives and directories.
//!
//! Only the top level of a source is read: ROM sets are flat lists of chip
//! dumps, so anything nested is skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use neocart_shared::{read_file_with_limit, FileReadError, MAX_ROM_FILE_BYTES};
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::files::{IntakeFilter, RomFiles};

/// Produces the named buffers of one ROM set.
pub trait Extractor: Send + Sync {
    fn extract(&self, source: &Path) -> Result<RomFiles, ExtractionError>;
}

/// Reads chip dumps straight out of a `.zip` archive.
#[derive(Debug, Clone)]
pub struct ZipExtractor {
    pub filter: IntakeFilter,
    pub max_entry_bytes: u64,
}

impl ZipExtractor {
    pub fn new(filter: IntakeFilter) -> Self {
        Self {
            filter,
            max_entry_bytes: MAX_ROM_FILE_BYTES,
        }
    }
}

impl Default for ZipExtractor {
    fn default() -> Self {
        Self::new(IntakeFilter::default())
    }
}

impl Extractor for ZipExtractor {
    fn extract(&self, source: &Path) -> Result<RomFiles, ExtractionError> {
        let file = File::open(source).map_err(|e| FileReadError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let mut archive =
            zip::ZipArchive::new(BufReader::new(file)).map_err(|e| ExtractionError::Archive {
                path: source.to_path_buf(),
                source: e,
            })?;

        let mut files = RomFiles::new();
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| ExtractionError::Archive {
                    path: source.to_path_buf(),
                    source: e,
                })?;

            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_string();
            if name.contains('/') || name.contains('\\') {
                warn!("Skipping nested entry {} in {}", name, source.display());
                continue;
            }
            if !self.filter.accepts(&name) {
                continue;
            }

            let len = entry.size();
            if len > self.max_entry_bytes {
                return Err(ExtractionError::EntryTooLarge {
                    path: source.to_path_buf(),
                    entry: name,
                    len,
                    max: self.max_entry_bytes,
                });
            }

            let mut data = Vec::with_capacity(len as usize);
            entry
                .read_to_end(&mut data)
                .map_err(|e| ExtractionError::Entry {
                    path: source.to_path_buf(),
                    entry: name.clone(),
                    source: e,
                })?;

            debug!("{} ({} bytes)", name, data.len());
            store(&mut files, source, name, data);
        }

        Ok(files)
    }
}

/// Add one entry, warning when it replaces an earlier entry of the same name.
/// Returns true if something was replaced.
fn store(files: &mut RomFiles, source: &Path, name: String, data: Vec<u8>) -> bool {
    let replaced = files.insert(name.clone(), data).is_some();
    if replaced {
        warn!(
            "Duplicate entry {} in {}; keeping the later one",
            name,
            source.display()
        );
    }
    replaced
}

/// Reads chip dumps from an already unpacked ROM directory.
#[derive(Debug, Clone)]
pub struct DirectoryExtractor {
    pub filter: IntakeFilter,
    pub max_file_bytes: u64,
}

impl DirectoryExtractor {
    pub fn new(filter: IntakeFilter) -> Self {
        Self {
            filter,
            max_file_bytes: MAX_ROM_FILE_BYTES,
        }
    }
}

impl Default for DirectoryExtractor {
    fn default() -> Self {
        Self::new(IntakeFilter::default())
    }
}

impl Extractor for DirectoryExtractor {
    fn extract(&self, source: &Path) -> Result<RomFiles, ExtractionError> {
        let dir_err = |e| ExtractionError::Directory {
            path: source.to_path_buf(),
            source: e,
        };

        let mut files = RomFiles::new();
        for entry in std::fs::read_dir(source).map_err(dir_err)? {
            let entry = entry.map_err(dir_err)?;
            let path = entry.path();

            if !entry.file_type().map_err(dir_err)?.is_file() {
                debug!("Skipping non-file {}", path.display());
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                warn!("Skipping {} (file name is not UTF-8)", path.display());
                continue;
            };
            if !self.filter.accepts(&name) {
                continue;
            }

            let data = read_file_with_limit(&path, self.max_file_bytes)?;
            debug!("{} ({} bytes)", name, data.len());
            store(&mut files, source, name, data);
        }

        Ok(files)
    }
}

/// Picks [`DirectoryExtractor`] for directories and [`ZipExtractor`] for
/// everything else.
#[derive(Debug, Clone, Default)]
pub struct SourceExtractor {
    pub zip: ZipExtractor,
    pub directory: DirectoryExtractor,
}

impl SourceExtractor {
    pub fn new(filter: IntakeFilter) -> Self {
        Self {
            zip: ZipExtractor::new(filter.clone()),
            directory: DirectoryExtractor::new(filter),
        }
    }
}

impl Extractor for SourceExtractor {
    fn extract(&self, source: &Path) -> Result<RomFiles, ExtractionError> {
        if source.is_dir() {
            self.directory.extract(source)
        } else {
            self.zip.extract(source)
        }
    }
}
