pub(crate) mod collection_toml;
pub mod compression;
pub(crate) mod environment;
pub(crate) mod logging;
pub(crate) mod nom_helper;
pub(crate) mod strings;
pub(crate) mod time;
pub(crate) mod uuid;
