use log::warn;

/// Get a UTF16 string from provided bytes data. Stops at the first null character.
/// Invalid UTF16 (unpaired surrogates) is replaced rather than rejected
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let utf16_data: Vec<u16> = data
        .chunks_exact(2)
        .map(|wide_char| u16::from_le_bytes([wide_char[0], wide_char[1]]))
        .take_while(|wide_char| *wide_char != 0)
        .collect();

    match String::from_utf16(&utf16_data) {
        Ok(result) => result,
        Err(err) => {
            warn!("[strings] Failed to get UTF16 string: {err:?}. Replacing invalid characters");
            String::from_utf16_lossy(&utf16_data)
        }
    }
}

/// Drop every null byte and keep the remaining bytes as literal characters.
/// UTF16 text that only uses the first code page collapses to its plain form. Other bytes are
/// kept as-is so nothing in the source is lost
pub(crate) fn extract_narrowed_string(data: &[u8]) -> String {
    data.iter()
        .filter(|value| **value != 0)
        .map(|value| char::from(*value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_narrowed_string, extract_utf16_string};

    #[test]
    fn test_extract_utf16_string() {
        let test_data = [
            92, 0, 68, 0, 69, 0, 86, 0, 73, 0, 67, 0, 69, 0, 0, 0, 65, 0,
        ];
        assert_eq!(extract_utf16_string(&test_data), "\\DEVICE");
    }

    #[test]
    fn test_extract_utf16_string_no_terminator() {
        let test_data = [67, 0, 58, 0, 0xac, 0x20];
        assert_eq!(extract_utf16_string(&test_data), "C:€");
    }

    #[test]
    fn test_extract_utf16_string_odd_length() {
        let test_data = [65, 0, 66];
        assert_eq!(extract_utf16_string(&test_data), "A");
    }

    #[test]
    fn test_extract_utf16_string_lossy() {
        let test_data = [65, 0, 0x00, 0xd8, 66, 0];
        assert_eq!(extract_utf16_string(&test_data), "A\u{fffd}B");
    }

    #[test]
    fn test_extract_narrowed_string() {
        let test_data = [67, 0, 77, 0, 68, 0, 46, 0, 69, 0, 88, 0, 69, 0];
        assert_eq!(extract_narrowed_string(&test_data), "CMD.EXE");
    }

    #[test]
    fn test_extract_narrowed_string_keeps_bytes() {
        let test_data = [65, 0, 0xff, 0x01, 66];
        assert_eq!(extract_narrowed_string(&test_data), "A\u{ff}\u{1}B");
    }
}
