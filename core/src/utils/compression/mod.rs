pub mod decompress;
pub mod error;
pub(crate) mod xpress;
