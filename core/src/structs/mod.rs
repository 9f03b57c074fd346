pub mod toml;
pub mod windows;
