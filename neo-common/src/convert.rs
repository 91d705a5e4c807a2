//! Single-archive conversion: extract, assemble, write.

use std::path::{Path, PathBuf};

use neocart_shared::NEO_ROM_FORMAT;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::error::{AssembleError, ConvertError};
use crate::extract::Extractor;
use crate::formats::NeoHeader;
use crate::writer::RomWriter;

/// Cartridge name for a source: its base name without extension.
pub fn cartridge_name(source: &Path) -> Result<String, ConvertError> {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ConvertError::InvalidSource {
            path: source.to_path_buf(),
        })
}

/// `<out_dir>/<name>.neo`
pub fn output_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(format!("{}.{}", name, NEO_ROM_FORMAT.extension))
}

/// Convert one ROM archive (or unpacked directory) into `<out_dir>/<name>.neo`.
///
/// `year` goes into the header as-is. Nothing is written unless the whole
/// image was assembled.
pub fn convert_one(
    source: &Path,
    out_dir: &Path,
    extractor: &dyn Extractor,
    writer: &dyn RomWriter,
    year: u32,
) -> Result<PathBuf, ConvertError> {
    let name = cartridge_name(source)?;
    if name.len() > NeoHeader::MAX_NAME_LEN {
        return Err(AssembleError::NameTooLong {
            len: name.len(),
            name,
        }
        .into());
    }

    let files = extractor.extract(source)?;
    debug!(
        "Loaded {} files ({} bytes) from {}",
        files.len(),
        files.total_bytes(),
        source.display()
    );

    let image = assemble(&name, &files, year)?;

    let out_path = output_path(out_dir, &name);
    writer
        .write(&out_path, &image)
        .map_err(|e| ConvertError::Write {
            path: out_path.clone(),
            source: e,
        })?;

    info!("Wrote {} ({} bytes)", out_path.display(), image.len());
    Ok(out_path)
}
