use super::{
    error::CompressionError,
    xpress::{huffman::decompress_xpress_huffman, lz77::decompress_lz77, lznt::decompress_lznt},
};
use log::warn;

/// Compression algorithms Windows can store in the MAM container
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CompressionAlgorithm {
    None,
    Default,
    Lznt1,
    Xpress,
    XpressHuffman,
    Unknown(u8),
}

impl CompressionAlgorithm {
    /// Map the algorithm id found in the container signature
    pub fn from_id(id: u8) -> CompressionAlgorithm {
        match id {
            0 => CompressionAlgorithm::None,
            1 => CompressionAlgorithm::Default,
            2 => CompressionAlgorithm::Lznt1,
            3 => CompressionAlgorithm::Xpress,
            4 => CompressionAlgorithm::XpressHuffman,
            _ => CompressionAlgorithm::Unknown(id),
        }
    }
}

/// Expands a compressed payload into exactly `size` bytes.
///
/// The record decoder only depends on this trait, so callers may swap in another backend
/// (for example the native Windows API) without touching any parsing code
pub trait Expander: Sync {
    fn expand(&self, payload: &[u8], algorithm: u8, size: u32) -> Result<Vec<u8>, CompressionError>;
}

/// Pure Rust implementation of the LZNT1, XPRESS and XPRESS Huffman algorithms
#[derive(Debug, Default, Clone, Copy)]
pub struct XpressExpander;

impl Expander for XpressExpander {
    fn expand(&self, payload: &[u8], algorithm: u8, size: u32) -> Result<Vec<u8>, CompressionError> {
        decompress_xpress(payload, size, &CompressionAlgorithm::from_id(algorithm))
    }
}

/// Decompress data using one of the xpress family algorithms
pub(crate) fn decompress_xpress(
    data: &[u8],
    decompress_size: u32,
    format: &CompressionAlgorithm,
) -> Result<Vec<u8>, CompressionError> {
    let size = decompress_size as usize;
    match format {
        CompressionAlgorithm::XpressHuffman => decompress_xpress_huffman(data, size),
        CompressionAlgorithm::Xpress => decompress_lz77(data, size),
        CompressionAlgorithm::Lznt1 => decompress_lznt(data, size),
        CompressionAlgorithm::Default => {
            warn!("[compression] Default type unsupported");
            Err(CompressionError::UnsupportedAlgorithm)
        }
        CompressionAlgorithm::None => {
            warn!("[compression] None type unsupported");
            Err(CompressionError::UnsupportedAlgorithm)
        }
        CompressionAlgorithm::Unknown(id) => {
            warn!("[compression] Unknown compression type: {id}");
            Err(CompressionError::UnsupportedAlgorithm)
        }
    }
}
