use crate::utils::compression::error::CompressionError;
use log::error;

const LZNT1_COMPRESSED_FLAG: u16 = 0x8000;
const LZNT1_CHUNK_SIZE: usize = 4096;

/// Decompress LZNT1 data. Data is split into chunks that each expand to at most 4KB
pub(crate) fn decompress_lznt(
    data: &[u8],
    decompress_size: usize,
) -> Result<Vec<u8>, CompressionError> {
    let mut output: Vec<u8> = Vec::with_capacity(decompress_size);
    let mut position = 0;

    while position + 2 <= data.len() && output.len() < decompress_size {
        let header = u16::from_le_bytes([data[position], data[position + 1]]);
        position += 2;
        // A zero header terminates the stream
        if header == 0 {
            break;
        }

        let chunk_len = (header & 0xfff) as usize + 1;
        let chunk = match data.get(position..position + chunk_len) {
            Some(result) => result,
            None => {
                error!(
                    "[compression] LZNT1 chunk of {chunk_len} bytes at {position} past end of data"
                );
                return Err(CompressionError::CorruptPayload);
            }
        };
        position += chunk_len;

        if header & LZNT1_COMPRESSED_FLAG == 0 {
            output.extend_from_slice(chunk);
            continue;
        }
        decompress_chunk(chunk, &mut output)?;
    }

    if output.len() < decompress_size {
        error!(
            "[compression] LZNT1 data ended early. Expected {decompress_size} bytes got {}",
            output.len()
        );
        return Err(CompressionError::CorruptPayload);
    }

    output.truncate(decompress_size);
    Ok(output)
}

fn decompress_chunk(chunk: &[u8], output: &mut Vec<u8>) -> Result<(), CompressionError> {
    let chunk_start = output.len();
    let mut position = 0;

    while position < chunk.len() {
        let flags = chunk[position];
        position += 1;

        for flag_bit in 0..8 {
            if position >= chunk.len() {
                break;
            }
            if flags & (1 << flag_bit) == 0 {
                output.push(chunk[position]);
                position += 1;
                continue;
            }

            let token = match chunk.get(position..position + 2) {
                Some(value) => u16::from_le_bytes([value[0], value[1]]) as usize,
                None => {
                    error!("[compression] LZNT1 copy token truncated");
                    return Err(CompressionError::CorruptPayload);
                }
            };
            position += 2;

            let decoded = output.len() - chunk_start;
            if decoded == 0 {
                error!("[compression] LZNT1 copy token before any literal");
                return Err(CompressionError::CorruptPayload);
            }

            // Offset and length split moves with how much of the chunk is decoded
            let mut length_mask = 0xfff;
            let mut offset_shift = 12;
            let mut chunk_position = decoded - 1;
            while chunk_position >= 0x10 {
                length_mask >>= 1;
                offset_shift -= 1;
                chunk_position >>= 1;
            }

            let length = (token & length_mask) + 3;
            let offset = (token >> offset_shift) + 1;
            if offset > decoded || decoded + length > LZNT1_CHUNK_SIZE {
                error!("[compression] LZNT1 copy token outside of chunk. Offset {offset} length {length}");
                return Err(CompressionError::CorruptPayload);
            }

            let start = output.len() - offset;
            for index in 0..length {
                let value = output[start + index];
                output.push(value);
            }
        }
    }
    Ok(())
}
