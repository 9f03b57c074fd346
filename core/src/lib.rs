//! Decoder for Windows Prefetch (`.pf`) files.
//!
//! Supports the uncompressed revisions written by Windows XP (17), Vista/7 (23) and 8.1 (26)
//! plus the MAM compressed container used since Windows 10 (30, and 31 on Windows 11)

pub mod core;
pub mod error;
pub mod structs;

mod artifacts;
mod filesystem;
mod output;
mod utils;

pub mod prefetch {
    pub use crate::artifacts::os::windows::prefetch::{
        classify::{classify, classify_reader, PrefetchFormat},
        error::PrefetchError,
        header::unwrap_container,
        parser::{grab_prefetch, read_directory, read_prefetch},
        pf::{parse_prefetch, parse_prefetch_reader, parse_prefetch_with},
        report::{csv_rows, execution_timeline},
    };
}

pub mod compression {
    pub use crate::utils::compression::{
        decompress::{CompressionAlgorithm, Expander, XpressExpander},
        error::CompressionError,
    };
}
