//! Filesystem helpers shared across neocart crates.

use std::path::{Path, PathBuf};

/// Maximum allowed size of a single ROM chip file read into memory.
pub const MAX_ROM_FILE_BYTES: u64 = 512 * 1024 * 1024; // 512 MiB

#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {} ({len} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, len: u64, max: u64 },
}

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>, FileReadError> {
    let io_err = |source| FileReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let len = std::fs::metadata(path).map_err(io_err)?.len();
    if len > max_bytes {
        return Err(FileReadError::TooLarge {
            path: path.to_path_buf(),
            len,
            max: max_bytes,
        });
    }
    std::fs::read(path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p1.bin");
        std::fs::write(&path, [1u8, 2, 3, 4]).unwrap();

        let bytes = read_file_with_limit(&path, 4).unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_read_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c1.bin");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let err = read_file_with_limit(&path, 8).unwrap_err();
        assert!(matches!(err, FileReadError::TooLarge { len: 16, max: 8, .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file_with_limit(&dir.path().join("missing.bin"), 8).unwrap_err();
        assert!(matches!(err, FileReadError::Io { .. }));
    }
}
