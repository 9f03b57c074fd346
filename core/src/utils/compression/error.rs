use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CompressionError {
    /// Algorithm id is none, default or unknown
    UnsupportedAlgorithm,
    /// Payload does not decode to the declared size
    CorruptPayload,
}

impl std::error::Error for CompressionError {}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionError::UnsupportedAlgorithm => {
                write!(f, "Compression algorithm not supported")
            }
            CompressionError::CorruptPayload => write!(f, "Could not decompress xpress data"),
        }
    }
}
