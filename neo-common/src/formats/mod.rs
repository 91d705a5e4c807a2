//! Binary formats written by neo-common.

pub mod neo_header;

pub use neo_header::NeoHeader;
