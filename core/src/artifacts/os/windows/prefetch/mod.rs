pub(crate) mod classify;
pub(crate) mod error;
mod fileinfo;
mod filenames;
pub(crate) mod header;
mod layout;
mod metrics;
pub(crate) mod parser;
pub(crate) mod pf;
pub(crate) mod report;
mod volume;
