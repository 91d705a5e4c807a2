//! Inspect .neo images

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use neo_common::{NeoHeader, Slot};

/// Arguments for inspecting a .neo image
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Path to the .neo image
    pub neo_file: PathBuf,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let path = &args.neo_file;
    let mut file =
        File::open(path).with_context(|| format!("Failed to open image: {}", path.display()))?;
    let file_size = file
        .metadata()
        .with_context(|| format!("Failed to read image metadata: {}", path.display()))?
        .len();

    let mut bytes = vec![0u8; NeoHeader::SIZE];
    file.read_exact(&mut bytes)
        .with_context(|| format!("Image too short for a NEO header: {}", path.display()))?;

    let header = NeoHeader::from_bytes(&bytes)
        .with_context(|| format!("Not a NEO version 1 image: {}", path.display()))?;

    println!("═══════════════════════════════════════════════════════════");
    println!("NEO image: {}", path.display());
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("CARTRIDGE");
    println!("───────────────────────────────────────────────────────────");
    println!("  Name:         {}", header.name);
    println!("  Manufacturer: {}", header.manufacturer);
    println!("  Year:         {}", header.year);
    println!("  Genre:        {}", header.genre);
    println!("  NGH:          {}", header.ngh);
    println!();
    println!("REGIONS");
    println!("───────────────────────────────────────────────────────────");
    for slot in Slot::ALL {
        println!("  {:<3} {:>12} bytes", slot.name(), header.sizes.get(slot));
    }
    println!();
    println!("  File:         {} bytes", file_size);
    println!("  Expected:     {} bytes", header.image_len());

    if file_size != header.image_len() {
        anyhow::bail!(
            "Image size mismatch: {} is {} bytes, header describes {} bytes",
            path.display(),
            file_size,
            header.image_len()
        );
    }

    Ok(())
}
