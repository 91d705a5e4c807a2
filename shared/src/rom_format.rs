//! ROM format specification for `.neo` cartridge images.
//!
//! `RomFormat` is the single source of truth for the file extension, tag
//! bytes and version of the images produced by `neo-common`.
//!
//! # Example
//!
//! ```
//! use neocart_shared::NEO_ROM_FORMAT;
//!
//! assert_eq!(NEO_ROM_FORMAT.extension, "neo");
//! assert_eq!(NEO_ROM_FORMAT.tag(), [b'N', b'E', b'O', 1]);
//! ```

/// ROM format specification.
#[derive(Debug, Clone, Copy)]
pub struct RomFormat {
    /// Output file extension without dot (e.g., "neo")
    pub extension: &'static str,

    /// Magic bytes at the start of the image, before the version byte
    pub magic: &'static [u8; 3],

    /// Format version, stored as the fourth tag byte
    pub version: u8,

    /// Extension of the source archives the batch driver picks up
    pub archive_ext: &'static str,

    /// Manufacturer written into every header
    pub manufacturer: &'static str,
}

impl RomFormat {
    /// Create a new ROM format specification.
    pub const fn new(
        extension: &'static str,
        magic: &'static [u8; 3],
        version: u8,
        archive_ext: &'static str,
        manufacturer: &'static str,
    ) -> Self {
        Self {
            extension,
            magic,
            version,
            archive_ext,
            manufacturer,
        }
    }

    /// Full 4-byte tag: magic followed by the version byte.
    pub const fn tag(&self) -> [u8; 4] {
        [self.magic[0], self.magic[1], self.magic[2], self.version]
    }
}

/// NEO cartridge format, version 1.
///
/// - Image extension: `.neo`
/// - Tag bytes: `4E 45 4F 01`
/// - Source archives: `.zip`
pub const NEO_ROM_FORMAT: RomFormat = RomFormat::new("neo", b"NEO", 1, "zip", "SNK");
