use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum CollectionError {
    NoFile,
    BadToml,
    CreateDirectory,
    LogFile,
    Prefetch,
    Serialize,
    Output,
}

impl std::error::Error for CollectionError {}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::NoFile => write!(f, "Failed to read TOML file"),
            CollectionError::BadToml => write!(f, "Failed to parse TOML data"),
            CollectionError::CreateDirectory => write!(f, "Could not create directory(ies)"),
            CollectionError::LogFile => write!(f, "Could not create log file"),
            CollectionError::Prefetch => write!(f, "Failed to collect prefetch files"),
            CollectionError::Serialize => write!(f, "Failed to serialize prefetch data"),
            CollectionError::Output => write!(f, "Failed to output prefetch data"),
        }
    }
}
