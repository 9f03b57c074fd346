mod error;
pub(crate) mod files;
