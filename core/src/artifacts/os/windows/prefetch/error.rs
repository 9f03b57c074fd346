use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefetchError {
    /// Neither a known revision nor the compressed container
    UnknownFormat,
    /// Container magic or record signature did not match
    BadSignature,
    ChecksumMismatch,
    DecompressionFailed,
    /// A field or section lies outside of the record
    TruncatedRecord,
    ReadFile,
    ReadDirectory,
}

impl std::error::Error for PrefetchError {}

impl fmt::Display for PrefetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefetchError::UnknownFormat => write!(f, "Unknown prefetch format"),
            PrefetchError::BadSignature => write!(f, "Bad prefetch signature"),
            PrefetchError::ChecksumMismatch => write!(f, "Prefetch container checksum mismatch"),
            PrefetchError::DecompressionFailed => write!(f, "Failed to decompress prefetch data"),
            PrefetchError::TruncatedRecord => write!(f, "Prefetch record is truncated"),
            PrefetchError::ReadFile => write!(f, "Failed to read file"),
            PrefetchError::ReadDirectory => write!(f, "Failed to read directory"),
        }
    }
}
