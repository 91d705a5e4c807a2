//! Cartridge image assembly.

use tracing::info;

use crate::aggregate::{append_region, warn_ambiguous, RegionSizes};
use crate::error::AssembleError;
use crate::files::RomFiles;
use crate::formats::NeoHeader;
use crate::region::Slot;

/// Build the full `.neo` image for `name` from an extracted file set.
///
/// Output is the 4096-byte header followed by the P, S, M, V1, V2 and C
/// payloads in that order. Empty regions keep their (zero) header slot. V2
/// never has a payload.
pub fn assemble(name: &str, files: &RomFiles, year: u32) -> Result<Vec<u8>, AssembleError> {
    let sizes = RegionSizes::from_files(files)?;
    let header = NeoHeader::new(name, sizes, year)?;

    warn_ambiguous(files);

    let mut image = Vec::with_capacity(header.image_len() as usize);
    image.extend_from_slice(&header.to_bytes());

    for slot in Slot::ALL {
        if let Some(tag) = slot.tag() {
            append_region(&mut image, files, tag);
        }
    }

    info!(
        "Assembled {}: {} bytes (P={} S={} M={} V1={} V2={} C={})",
        name,
        image.len(),
        sizes.p,
        sizes.s,
        sizes.m,
        sizes.v1,
        sizes.v2,
        sizes.c
    );

    Ok(image)
}
