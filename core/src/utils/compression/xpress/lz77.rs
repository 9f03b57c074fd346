use crate::utils::compression::error::CompressionError;
use log::error;

/// Decompress plain LZ77 data. Also referred to as just XPRESS compression
pub(crate) fn decompress_lz77(
    data: &[u8],
    decompress_size: usize,
) -> Result<Vec<u8>, CompressionError> {
    let mut output: Vec<u8> = Vec::with_capacity(decompress_size);
    let mut reader = Reader { data, position: 0 };
    let mut flags = 0;
    let mut flag_count = 0;
    let mut last_length_half_byte: Option<usize> = None;

    while output.len() < decompress_size {
        if flag_count == 0 {
            if reader.position == data.len() {
                break;
            }
            flags = reader.read_four_bytes()?;
            flag_count = 32;
        }
        flag_count -= 1;

        if flags & (1 << flag_count) == 0 {
            if reader.position == data.len() {
                break;
            }
            output.push(reader.read_byte()?);
            continue;
        }

        if reader.position == data.len() {
            break;
        }
        let match_bytes = reader.read_two_bytes()? as usize;
        let mut length = match_bytes % 8;
        let offset = (match_bytes / 8) + 1;

        if length == 7 {
            // Two lengths share one byte, low nibble first
            length = match last_length_half_byte.take() {
                Some(position) => (data[position] / 16) as usize,
                None => {
                    last_length_half_byte = Some(reader.position);
                    (reader.read_byte()? % 16) as usize
                }
            };
            if length == 15 {
                length = reader.read_byte()? as usize;
                if length == 255 {
                    length = reader.read_two_bytes()? as usize;
                    if length == 0 {
                        length = reader.read_four_bytes()? as usize;
                    }
                    if length < 22 {
                        error!("[compression] Invalid LZ77 match length: {length}");
                        return Err(CompressionError::CorruptPayload);
                    }
                    length -= 22;
                }
                length += 15;
            }
            length += 7;
        }
        length += 3;

        if offset > output.len() {
            error!(
                "[compression] LZ77 match offset {offset} before start of output (size {})",
                output.len()
            );
            return Err(CompressionError::CorruptPayload);
        }
        let start = output.len() - offset;
        // Never copy past the expected size
        let length = length.min(decompress_size - output.len());
        for index in 0..length {
            let value = output[start + index];
            output.push(value);
        }
    }

    if output.len() < decompress_size {
        error!(
            "[compression] LZ77 data ended early. Expected {decompress_size} bytes got {}",
            output.len()
        );
        return Err(CompressionError::CorruptPayload);
    }

    output.truncate(decompress_size);
    Ok(output)
}

struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl Reader<'_> {
    fn take(&mut self, count: usize) -> Result<&[u8], CompressionError> {
        match self.data.get(self.position..self.position + count) {
            Some(value) => {
                self.position += count;
                Ok(value)
            }
            None => {
                error!(
                    "[compression] LZ77 read of {count} bytes at {} past end of data",
                    self.position
                );
                Err(CompressionError::CorruptPayload)
            }
        }
    }

    fn read_byte(&mut self) -> Result<u8, CompressionError> {
        Ok(self.take(1)?[0])
    }

    fn read_two_bytes(&mut self) -> Result<u16, CompressionError> {
        let value = self.take(2)?;
        Ok(u16::from_le_bytes([value[0], value[1]]))
    }

    fn read_four_bytes(&mut self) -> Result<u32, CompressionError> {
        let value = self.take(4)?;
        Ok(u32::from_le_bytes([value[0], value[1], value[2], value[3]]))
    }
}
