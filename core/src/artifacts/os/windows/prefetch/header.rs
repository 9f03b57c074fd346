use super::{error::PrefetchError, filenames::executable_name, layout::EXECUTABLE_NAME_SIZE};
use crate::utils::{
    compression::decompress::Expander,
    nom_helper::{nom_data, nom_unsigned_four_bytes},
};
use flate2::Crc;
use log::error;

/// First three bytes of a compressed Prefetch file
pub(crate) const CONTAINER_MAGIC: &[u8] = b"MAM";
const CONTAINER_MAGIC_MASK: u32 = 0x00ffffff;
const CONTAINER_MAGIC_VALUE: u32 = 0x004d414d;
const CONTAINER_HEADER_SIZE: usize = 8;

#[derive(Debug)]
pub(crate) struct Header {
    pub(crate) version: u32,
    pub(crate) signature: u32,
    pub(crate) size: u32,
    pub(crate) executable_name: String,
    pub(crate) path_hash: u32,
}

impl Header {
    /// Parse the 84 byte header found at the start of every uncompressed record
    pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], Header> {
        let (input, version) = nom_unsigned_four_bytes(data)?;
        let (input, signature) = nom_unsigned_four_bytes(input)?;
        let (input, _unknown) = nom_unsigned_four_bytes(input)?;
        let (input, size) = nom_unsigned_four_bytes(input)?;
        let (input, name_data) = nom_data(input, EXECUTABLE_NAME_SIZE as u64)?;
        let (input, path_hash) = nom_unsigned_four_bytes(input)?;
        let (input, _unknown_flags) = nom_unsigned_four_bytes(input)?;

        let header = Header {
            version,
            signature,
            size,
            executable_name: executable_name(name_data),
            path_hash,
        };

        Ok((input, header))
    }
}

#[derive(Debug)]
pub(crate) struct CompressedHeader {
    pub(crate) signature: u32,
    pub(crate) uncompressed_size: u32,
}

impl CompressedHeader {
    /// Parse compressed prefetch header. Default since Windows 10
    pub(crate) fn parse_compressed_header(data: &[u8]) -> nom::IResult<&[u8], CompressedHeader> {
        let (input, signature) = nom_unsigned_four_bytes(data)?;
        let (input, uncompressed_size) = nom_unsigned_four_bytes(input)?;
        let header = CompressedHeader {
            signature,
            uncompressed_size,
        };

        Ok((input, header))
    }

    /// Low 24 bits hold `MAM`
    pub(crate) fn has_magic(&self) -> bool {
        self.signature & CONTAINER_MAGIC_MASK == CONTAINER_MAGIC_VALUE
    }

    /// Algorithm id passed to the decompression routine
    pub(crate) fn algorithm(&self) -> u8 {
        ((self.signature >> 24) & 0xf) as u8
    }

    /// Any bit in the top nibble marks a CRC32 prefixed payload
    pub(crate) fn has_checksum(&self) -> bool {
        (self.signature >> 28) != 0
    }
}

/// Validate the MAM container and expand its payload into an uncompressed version 30 record
pub fn unwrap_container(data: &[u8], expander: &dyn Expander) -> Result<Vec<u8>, PrefetchError> {
    let (mut payload, header) = match CompressedHeader::parse_compressed_header(data) {
        Ok(result) => result,
        Err(err) => {
            error!("[prefetch] Failed to parse compressed header: {err:?}");
            return Err(PrefetchError::TruncatedRecord);
        }
    };

    if !header.has_magic() {
        error!(
            "[prefetch] Bad compressed prefetch signature: {:#x}",
            header.signature
        );
        return Err(PrefetchError::BadSignature);
    }

    if header.has_checksum() {
        let (input, checksum) = match nom_unsigned_four_bytes(payload) {
            Ok(result) => result,
            Err(err) => {
                error!("[prefetch] Failed to get container checksum: {err:?}");
                return Err(PrefetchError::TruncatedRecord);
            }
        };

        let computed = container_checksum(&data[..CONTAINER_HEADER_SIZE], input);
        if computed != checksum {
            error!(
                "[prefetch] Container checksum mismatch. Expected {checksum:#x} got {computed:#x}"
            );
            return Err(PrefetchError::ChecksumMismatch);
        }
        payload = input;
    }

    let decompress_data =
        match expander.expand(payload, header.algorithm(), header.uncompressed_size) {
            Ok(result) => result,
            Err(err) => {
                error!(
                    "[prefetch] Could not decompress prefetch data with algorithm {}: {err:?}",
                    header.algorithm()
                );
                return Err(PrefetchError::DecompressionFailed);
            }
        };

    if decompress_data.len() != header.uncompressed_size as usize {
        error!(
            "[prefetch] Decompressed size {} does not match expected size {}",
            decompress_data.len(),
            header.uncompressed_size
        );
        return Err(PrefetchError::DecompressionFailed);
    }

    Ok(decompress_data)
}

/// CRC32 over the container header, a zeroed checksum field, then the payload
fn container_checksum(header: &[u8], payload: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(header);
    crc.update(&[0; 4]);
    crc.update(payload);
    crc.sum()
}
