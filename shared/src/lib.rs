//! Shared types for the neocart ROM tools.
//!
//! Holds the `.neo` format constants and the filesystem helpers used by both
//! the conversion core and the CLI.

pub mod fs;
pub mod rom_format;

pub use fs::{read_file_with_limit, FileReadError, MAX_ROM_FILE_BYTES};
pub use rom_format::{RomFormat, NEO_ROM_FORMAT};
