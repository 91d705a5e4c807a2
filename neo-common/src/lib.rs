//! NEO cartridge image assembly.
//!
//! Turns a set of arcade ROM chip dumps into a single `.neo` image: a fixed
//! 4096-byte header followed by the P, S, M, V1, V2 and C region payloads.
//!
//! # Pipeline
//!
//! ```text
//! archive ──Extractor──▶ RomFiles ──classify/aggregate──▶ RegionSizes + payloads
//!                                                              │
//!                         NeoHeader::new(name, sizes, year) ◀──┘
//!                                         │
//!            header ‖ P ‖ S ‖ M ‖ V1 ‖ V2 ‖ C ──RomWriter──▶ <name>.neo
//! ```
//!
//! Everything between the extractor and the writer is pure: the same name,
//! files and year always give the same bytes.

pub mod aggregate;
pub mod assemble;
pub mod convert;
pub mod error;
pub mod extract;
pub mod files;
pub mod formats;
pub mod region;
pub mod writer;

pub use aggregate::{region_data, region_size, RegionSizes};
pub use assemble::assemble;
pub use convert::{cartridge_name, convert_one, output_path};
pub use error::{AssembleError, ConvertError, ExtractionError};
pub use extract::{DirectoryExtractor, Extractor, SourceExtractor, ZipExtractor};
pub use files::{IntakeFilter, RomFiles};
pub use formats::NeoHeader;
pub use region::{classify, matching_tags, RegionTag, Slot};
pub use writer::{AtomicFileWriter, RomWriter};
