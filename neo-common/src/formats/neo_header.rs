//! NEO cartridge header (`.neo`, version 1)
//!
//! Fixed 4096-byte header in front of the region payloads. All integers are
//! little-endian.
//!
//! # Layout
//! ```text
//! 0x000: tag        "NEO" + version byte (0x01)
//! 0x004: sizes      u32 × 6 (P, S, M, V1, V2, C)
//! 0x01C: metadata   u32 × 4 (year, genre, screenshot, NGH)
//! 0x02C: name       33 bytes, zero-padded
//! 0x04D: maker      17 bytes, zero-padded ("SNK")
//! 0x05E: filler     zero bytes up to 0x1000
//! 0x1000: P ‖ S ‖ M ‖ V1 ‖ V2 ‖ C
//! ```

use neocart_shared::NEO_ROM_FORMAT;

use crate::aggregate::RegionSizes;
use crate::error::AssembleError;

/// Parsed or to-be-written NEO header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeoHeader {
    pub sizes: RegionSizes,
    pub year: u32,
    /// Reserved, written as 0
    pub genre: u32,
    /// Reserved, written as 0
    pub screenshot: u32,
    /// Reserved, written as 0
    pub ngh: u32,
    pub name: String,
    pub manufacturer: String,
}

impl NeoHeader {
    pub const SIZE: usize = 4096;

    pub const TAG_LEN: usize = 4;
    pub const SIZES_LEN: usize = 6 * 4;
    pub const METADATA_LEN: usize = 4 * 4;
    pub const NAME_LEN: usize = 33;
    pub const MANUFACTURER_LEN: usize = 17;
    pub const FILLER_LEN: usize = Self::SIZE
        - (Self::TAG_LEN
            + Self::SIZES_LEN
            + Self::METADATA_LEN
            + Self::NAME_LEN
            + Self::MANUFACTURER_LEN);

    pub const SIZES_OFFSET: usize = Self::TAG_LEN;
    pub const METADATA_OFFSET: usize = Self::SIZES_OFFSET + Self::SIZES_LEN;
    pub const NAME_OFFSET: usize = Self::METADATA_OFFSET + Self::METADATA_LEN;
    pub const MANUFACTURER_OFFSET: usize = Self::NAME_OFFSET + Self::NAME_LEN;
    pub const FILLER_OFFSET: usize = Self::MANUFACTURER_OFFSET + Self::MANUFACTURER_LEN;

    /// Longest cartridge name in bytes; the name field always keeps at
    /// least one trailing zero.
    pub const MAX_NAME_LEN: usize = Self::NAME_LEN - 1;

    /// Header for `name` with the given slot sizes and build year.
    ///
    /// The year is a parameter so that the same inputs always produce the
    /// same bytes; callers pick "now" at the edge.
    pub fn new(name: &str, sizes: RegionSizes, year: u32) -> Result<Self, AssembleError> {
        if name.len() > Self::MAX_NAME_LEN {
            return Err(AssembleError::NameTooLong {
                name: name.to_string(),
                len: name.len(),
            });
        }

        Ok(Self {
            sizes: RegionSizes { v2: 0, ..sizes },
            year,
            genre: 0,
            screenshot: 0,
            ngh: 0,
            name: name.to_string(),
            manufacturer: NEO_ROM_FORMAT.manufacturer.to_string(),
        })
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..Self::TAG_LEN].copy_from_slice(&NEO_ROM_FORMAT.tag());

        for (i, size) in self.sizes.to_array().iter().enumerate() {
            let at = Self::SIZES_OFFSET + i * 4;
            bytes[at..at + 4].copy_from_slice(&size.to_le_bytes());
        }

        let metadata = [self.year, self.genre, self.screenshot, self.ngh];
        for (i, word) in metadata.iter().enumerate() {
            let at = Self::METADATA_OFFSET + i * 4;
            bytes[at..at + 4].copy_from_slice(&word.to_le_bytes());
        }

        write_padded(
            &mut bytes[Self::NAME_OFFSET..Self::MANUFACTURER_OFFSET],
            self.name.as_bytes(),
        );
        write_padded(
            &mut bytes[Self::MANUFACTURER_OFFSET..Self::FILLER_OFFSET],
            self.manufacturer.as_bytes(),
        );

        bytes
    }

    /// Read header from bytes
    ///
    /// Returns `None` if the slice is shorter than a header or does not start
    /// with the NEO version 1 tag.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE || bytes[..Self::TAG_LEN] != NEO_ROM_FORMAT.tag() {
            return None;
        }

        let word = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };

        let mut sizes = [0u32; 6];
        for (i, size) in sizes.iter_mut().enumerate() {
            *size = word(Self::SIZES_OFFSET + i * 4);
        }

        Some(Self {
            sizes: RegionSizes::from_array(sizes),
            year: word(Self::METADATA_OFFSET),
            genre: word(Self::METADATA_OFFSET + 4),
            screenshot: word(Self::METADATA_OFFSET + 8),
            ngh: word(Self::METADATA_OFFSET + 12),
            name: read_padded(&bytes[Self::NAME_OFFSET..Self::MANUFACTURER_OFFSET]),
            manufacturer: read_padded(&bytes[Self::MANUFACTURER_OFFSET..Self::FILLER_OFFSET]),
        })
    }

    /// Length of the full image this header describes.
    pub fn image_len(&self) -> u64 {
        Self::SIZE as u64 + self.sizes.total()
    }
}

/// Copy `value` to the start of `field`; the rest stays zero.
fn write_padded(field: &mut [u8], value: &[u8]) {
    let len = value.len().min(field.len());
    field[..len].copy_from_slice(&value[..len]);
}

/// Text up to the first zero byte.
fn read_padded(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
