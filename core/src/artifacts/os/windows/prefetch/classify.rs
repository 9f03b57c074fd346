use super::{error::PrefetchError, header::CONTAINER_MAGIC};
use crate::utils::nom_helper::nom_unsigned_four_bytes;
use log::{error, warn};
use serde::Serialize;
use std::io::{Read, Seek, SeekFrom};

/// On disk Prefetch formats
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum PrefetchFormat {
    /// Windows XP and 2003
    Version17,
    /// Windows Vista and 7
    Version23,
    /// Windows 8
    Version26,
    /// MAM container holding a version 30 record (Windows 10+)
    Compressed,
}

/// Determine the Prefetch format from the first bytes of the file
pub fn classify(data: &[u8]) -> Result<PrefetchFormat, PrefetchError> {
    let version = match nom_unsigned_four_bytes(data) {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Not enough data to classify prefetch file: {err:?}");
            return Err(PrefetchError::TruncatedRecord);
        }
    };

    match version {
        17 => return Ok(PrefetchFormat::Version17),
        23 => return Ok(PrefetchFormat::Version23),
        26 => return Ok(PrefetchFormat::Version26),
        _ => {}
    }

    if data.starts_with(CONTAINER_MAGIC) {
        return Ok(PrefetchFormat::Compressed);
    }

    warn!("[prefetch] Unknown prefetch format: {version:#x}");
    Err(PrefetchError::UnknownFormat)
}

/// Classify a seekable source. The source is always rewound to the start before returning
pub fn classify_reader<R: Read + Seek>(reader: &mut R) -> Result<PrefetchFormat, PrefetchError> {
    let mut buffer = Vec::with_capacity(4);
    let read_result = match reader.seek(SeekFrom::Start(0)) {
        Ok(_) => reader.by_ref().take(4).read_to_end(&mut buffer),
        Err(err) => Err(err),
    };

    if let Err(err) = reader.seek(SeekFrom::Start(0)) {
        error!("[prefetch] Could not rewind prefetch source: {err:?}");
        return Err(PrefetchError::ReadFile);
    }

    if let Err(err) = read_result {
        error!("[prefetch] Could not read prefetch source: {err:?}");
        return Err(PrefetchError::ReadFile);
    }

    classify(&buffer)
}

impl PrefetchFormat {
    /// Layout revision used to decode this format
    pub fn version(&self) -> u32 {
        match self {
            PrefetchFormat::Version17 => 17,
            PrefetchFormat::Version23 => 23,
            PrefetchFormat::Version26 => 26,
            PrefetchFormat::Compressed => 30,
        }
    }
}
