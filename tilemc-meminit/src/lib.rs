#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! This crate converts image files into Verilog memory-initialization hex
//! tables (`.vh` include files).

mod error;
mod hex_table;

pub use error::MemInitError;
pub use hex_table::{HexTable, DEFAULT_DIGITS};
