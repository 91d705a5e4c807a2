//! Per-region size and payload aggregation.

use tracing::{debug, warn};

use crate::error::AssembleError;
use crate::files::RomFiles;
use crate::region::{matching_tags, RegionTag, Slot};

/// Total byte length of every file whose name passes `tag`'s test.
///
/// Fails with [`AssembleError::SizeOverflow`] if the total does not fit the
/// 32-bit header field.
pub fn region_size(files: &RomFiles, tag: RegionTag) -> Result<u32, AssembleError> {
    let size: u64 = files
        .iter()
        .filter(|(name, _)| tag.matches(name))
        .map(|(_, data)| data.len() as u64)
        .sum();

    u32::try_from(size).map_err(|_| AssembleError::SizeOverflow { region: tag, size })
}

/// Concatenated contents of every file whose name passes `tag`'s test, in
/// chip order (case-insensitive ascending file name).
pub fn region_data(files: &RomFiles, tag: RegionTag) -> Vec<u8> {
    let mut data = Vec::new();
    append_region(&mut data, files, tag);
    data
}

/// Append every matching file to `out` in chip order.
pub(crate) fn append_region(out: &mut Vec<u8>, files: &RomFiles, tag: RegionTag) {
    for name in files.sorted_names() {
        if !tag.matches(name) {
            continue;
        }
        if let Some(bytes) = files.get(name) {
            debug!("Region {}: {} ({} bytes)", tag, name, bytes.len());
            out.extend_from_slice(bytes);
        }
    }
}

/// Log every file that lands in more than one region.
///
/// Real ROM sets should not contain such names; they are kept in every
/// matching region rather than rejected.
pub(crate) fn warn_ambiguous(files: &RomFiles) {
    for name in files.sorted_names() {
        let tags = matching_tags(name);
        if tags.len() > 1 {
            let list: Vec<String> = tags.iter().map(ToString::to_string).collect();
            warn!("{} matches several regions ({}); included in each", name, list.join(", "));
        }
    }
}

/// Sizes of the six header slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionSizes {
    pub p: u32,
    pub s: u32,
    pub m: u32,
    pub v1: u32,
    /// Always zero: nothing maps to the second voice region.
    pub v2: u32,
    pub c: u32,
}

impl RegionSizes {
    /// Compute every slot size from a file set.
    pub fn from_files(files: &RomFiles) -> Result<Self, AssembleError> {
        Ok(Self {
            p: region_size(files, RegionTag::P)?,
            s: region_size(files, RegionTag::S)?,
            m: region_size(files, RegionTag::M)?,
            v1: region_size(files, RegionTag::V)?,
            v2: 0,
            c: region_size(files, RegionTag::C)?,
        })
    }

    pub fn get(&self, slot: Slot) -> u32 {
        match slot {
            Slot::P => self.p,
            Slot::S => self.s,
            Slot::M => self.m,
            Slot::V1 => self.v1,
            Slot::V2 => self.v2,
            Slot::C => self.c,
        }
    }

    /// Sizes in header order.
    pub fn to_array(&self) -> [u32; 6] {
        Slot::ALL.map(|slot| self.get(slot))
    }

    pub fn from_array(sizes: [u32; 6]) -> Self {
        let [p, s, m, v1, v2, c] = sizes;
        Self {
            p,
            s,
            m,
            v1,
            v2,
            c,
        }
    }

    /// Combined payload length of all slots.
    pub fn total(&self) -> u64 {
        self.to_array().iter().map(|&size| size as u64).sum()
    }
}
