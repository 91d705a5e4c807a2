//! Output writers for finished images.

use std::io::Write;
use std::path::Path;

/// Stores a finished image at `path`.
pub trait RomWriter: Send + Sync {
    fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()>;
}

/// Writes to a temporary file next to the destination and renames it into
/// place once every byte is on disk.
///
/// A failed write leaves no file at `path` (or the previous one untouched).
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicFileWriter;

impl RomWriter for AtomicFileWriter {
    fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
