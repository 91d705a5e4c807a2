//! Error types for image assembly and archive conversion.

use std::path::PathBuf;

use neocart_shared::FileReadError;

use crate::region::RegionTag;

/// Fatal input errors raised while building a cartridge image.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Cartridge name {name:?} is {len} bytes (max {max})", max = crate::formats::NeoHeader::MAX_NAME_LEN)]
    NameTooLong { name: String, len: usize },

    #[error("Region {region} is {size} bytes, which does not fit a 32-bit size field")]
    SizeOverflow { region: RegionTag, size: u64 },
}

/// Failure to turn an archive or directory into a ROM file set.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Read(#[from] FileReadError),

    #[error("Failed to read directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt or unreadable archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to read {entry} from {}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive entry {entry} in {} is too large ({len} bytes, max {max} bytes)", .path.display())]
    EntryTooLarge {
        path: PathBuf,
        entry: String,
        len: u64,
        max: u64,
    },
}

/// Error returned by [`crate::convert_one`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid ROM source {}: no file name", .path.display())]
    InvalidSource { path: PathBuf },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
