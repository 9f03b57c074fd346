/**
 * LZ77 + Huffman (XPRESS Huffman) decompression. Used by Windows 10+ compressed Prefetch files.
 *
 * References:
 *  `https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-xca`
 *
 * Other Parsers:
 *  `https://github.com/Velocidex/go-prefetch/blob/master/lzxpress.go`
 *  `https://github.com/ForensicRS/frnsc-prefetch`
 */
use crate::utils::compression::error::CompressionError;
use log::error;

/// Each block of compressed data expands to at most 64KB
const BLOCK_SIZE: usize = 65536;
/// 512 symbols, 4 bits per symbol length
const TABLE_SIZE: usize = 256;
const SYMBOL_COUNT: usize = 512;
const MAX_CODE_LENGTH: u32 = 15;
const DECODE_TABLE_SIZE: usize = 1 << MAX_CODE_LENGTH;
/// Zero filled words the bit reader may consume past the end of input
const MAX_OVERRUN_WORDS: usize = 2;

/// Decompress XPRESS Huffman data into exactly `decompress_size` bytes
pub(crate) fn decompress_xpress_huffman(
    data: &[u8],
    decompress_size: usize,
) -> Result<Vec<u8>, CompressionError> {
    let mut output: Vec<u8> = Vec::with_capacity(decompress_size);
    let mut position = 0;

    while output.len() < decompress_size {
        let table = DecodeTable::build(data, position)?;
        position += TABLE_SIZE;

        let mut bits = BitReader::new(data, position)?;
        let block_end = output.len() + BLOCK_SIZE;

        while output.len() < block_end && output.len() < decompress_size {
            let symbol = table.decode(&mut bits)?;
            if symbol < 256 {
                output.push(symbol as u8);
                continue;
            }

            let symbol = symbol - 256;
            let mut length = (symbol & 0xf) as usize;
            let offset_bits = (symbol >> 4) as u32;

            if length == 15 {
                length = bits.read_byte()? as usize;
                if length == 255 {
                    length = bits.read_two_bytes()? as usize;
                    if length < 15 {
                        error!("[compression] Invalid XPRESS Huffman match length: {length}");
                        return Err(CompressionError::CorruptPayload);
                    }
                    length -= 15;
                }
                length += 15;
            }
            length += 3;

            let offset = bits.peek(offset_bits) as usize + (1 << offset_bits);
            bits.skip(offset_bits)?;

            if offset > output.len() {
                error!(
                    "[compression] XPRESS Huffman match offset {offset} before start of output (size {})",
                    output.len()
                );
                return Err(CompressionError::CorruptPayload);
            }

            let start = output.len() - offset;
            for index in 0..length {
                // Matches may overlap the bytes they produce
                let value = output[start + index];
                output.push(value);
            }
        }

        position = bits.position;
    }

    output.truncate(decompress_size);
    Ok(output)
}

struct DecodeTable {
    symbols: Vec<u16>,
    lengths: [u8; SYMBOL_COUNT],
}

impl DecodeTable {
    /// Build the canonical prefix code lookup table found at `position`
    fn build(data: &[u8], position: usize) -> Result<DecodeTable, CompressionError> {
        let table_data = match data.get(position..position + TABLE_SIZE) {
            Some(result) => result,
            None => {
                error!(
                    "[compression] XPRESS Huffman table at {position} past end of data (size {})",
                    data.len()
                );
                return Err(CompressionError::CorruptPayload);
            }
        };

        let mut lengths = [0; SYMBOL_COUNT];
        for (index, value) in table_data.iter().enumerate() {
            lengths[index * 2] = value & 0xf;
            lengths[index * 2 + 1] = value >> 4;
        }

        let mut symbols = vec![0; DECODE_TABLE_SIZE];
        let mut entry = 0;
        for bit_length in 1..=MAX_CODE_LENGTH {
            for (symbol, length) in lengths.iter().enumerate() {
                if *length as u32 != bit_length {
                    continue;
                }
                let count = 1 << (MAX_CODE_LENGTH - bit_length);
                if entry + count > DECODE_TABLE_SIZE {
                    error!("[compression] XPRESS Huffman table is oversubscribed");
                    return Err(CompressionError::CorruptPayload);
                }
                symbols[entry..entry + count].fill(symbol as u16);
                entry += count;
            }
        }

        if entry != DECODE_TABLE_SIZE {
            error!("[compression] XPRESS Huffman table is incomplete: {entry} entries");
            return Err(CompressionError::CorruptPayload);
        }

        Ok(DecodeTable { symbols, lengths })
    }

    fn decode(&self, bits: &mut BitReader<'_>) -> Result<u16, CompressionError> {
        let symbol = self.symbols[bits.peek(MAX_CODE_LENGTH) as usize];
        bits.skip(self.lengths[symbol as usize] as u32)?;
        Ok(symbol)
    }
}

/// Reads 16 bit little endian words, most significant bit first
struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
    bits: u32,
    extra_bits: i32,
    overrun: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8], position: usize) -> Result<BitReader<'a>, CompressionError> {
        let mut reader = BitReader {
            data,
            position,
            bits: 0,
            extra_bits: 16,
            overrun: 0,
        };
        let high = reader.next_word()? as u32;
        let low = reader.next_word()? as u32;
        reader.bits = (high << 16) | low;
        Ok(reader)
    }

    fn peek(&self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        self.bits >> (32 - count)
    }

    fn skip(&mut self, count: u32) -> Result<(), CompressionError> {
        if count == 0 {
            return Ok(());
        }
        self.bits <<= count;
        self.extra_bits -= count as i32;
        if self.extra_bits < 0 {
            let word = self.next_word()? as u32;
            self.bits |= word << (-self.extra_bits) as u32;
            self.extra_bits += 16;
        }
        Ok(())
    }

    fn next_word(&mut self) -> Result<u16, CompressionError> {
        let word = match self.data.get(self.position..self.position + 2) {
            Some(value) => u16::from_le_bytes([value[0], value[1]]),
            None => {
                self.overrun += 1;
                if self.overrun > MAX_OVERRUN_WORDS {
                    error!("[compression] XPRESS Huffman bit stream ended early");
                    return Err(CompressionError::CorruptPayload);
                }
                0
            }
        };
        self.position += 2;
        Ok(word)
    }

    fn read_byte(&mut self) -> Result<u8, CompressionError> {
        match self.data.get(self.position) {
            Some(value) => {
                self.position += 1;
                Ok(*value)
            }
            None => {
                error!("[compression] XPRESS Huffman match length past end of data");
                Err(CompressionError::CorruptPayload)
            }
        }
    }

    fn read_two_bytes(&mut self) -> Result<u16, CompressionError> {
        match self.data.get(self.position..self.position + 2) {
            Some(value) => {
                self.position += 2;
                Ok(u16::from_le_bytes([value[0], value[1]]))
            }
            None => {
                error!("[compression] XPRESS Huffman match length past end of data");
                Err(CompressionError::CorruptPayload)
            }
        }
    }
}
