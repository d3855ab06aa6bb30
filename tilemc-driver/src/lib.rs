#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Mode-word encoding for the scanline/tiled memory access channels.

mod regmap;
mod scan_tiled;

pub use regmap::ScanTiledModeBits;
pub use scan_tiled::ScanTiledMode;
