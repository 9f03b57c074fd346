use super::layout::{volume_entry, Layout};
use crate::utils::{
    nom_helper::{nom_data, nom_seek, nom_u32_at, nom_u64_at, nom_unsigned_two_bytes},
    strings::extract_utf16_string,
    time::filetime_to_datetime,
};
use common::windows::PrefetchVolume;

/// Parse every volume entry. `data` is the volume information section.
/// Device paths are anchored to the start of their own entry, directory strings to the start of the section
pub(crate) fn parse_volumes<'a>(
    data: &'a [u8],
    count: u32,
    layout: &Layout,
) -> nom::IResult<&'a [u8], Vec<PrefetchVolume>> {
    let mut volumes: Vec<PrefetchVolume> = Vec::new();

    for index in 0..count as usize {
        let entry_offset = index * layout.volume_size;
        let (entry_start, _) = nom_seek(data, entry_offset as u64)?;
        let (_, entry) = nom_data(entry_start, layout.volume_size as u64)?;

        let (_, path_offset) = nom_u32_at(entry, volume_entry::PATH_OFFSET)?;
        let (_, path_chars) = nom_u32_at(entry, volume_entry::PATH_CHARS)?;
        let (_, creation) = nom_u64_at(entry, volume_entry::CREATION)?;
        let (_, serial) = nom_u32_at(entry, volume_entry::SERIAL)?;
        let (_, strings_offset) = nom_u32_at(entry, volume_entry::DIRECTORY_STRINGS_OFFSET)?;
        let (_, strings_count) = nom_u32_at(entry, volume_entry::DIRECTORY_STRINGS_COUNT)?;

        let (input, _) = nom_seek(entry_start, path_offset as u64)?;
        let (_, path_data) = nom_data(input, path_chars as u64 * 2)?;

        let (input, _) = nom_seek(data, strings_offset as u64)?;
        let (_, directory_strings) = get_directory_strings(input, strings_count)?;

        volumes.push(PrefetchVolume {
            device_path_length: path_chars,
            device_path: extract_utf16_string(path_data),
            creation: filetime_to_datetime(creation),
            serial_number: format!("{serial:x}"),
            directory_strings,
        });
    }

    Ok((data, volumes))
}

/// Directory strings are length prefixed (in characters) and followed by a two byte terminator
pub(crate) fn get_directory_strings(data: &[u8], count: u32) -> nom::IResult<&[u8], Vec<String>> {
    let mut input = data;
    let mut strings: Vec<String> = Vec::new();

    for _ in 0..count {
        let (remaining, chars) = nom_unsigned_two_bytes(input)?;
        let (remaining, string_data) = nom_data(remaining, chars as u64 * 2)?;
        let (remaining, _terminator) = nom_data(remaining, 2)?;

        strings.push(extract_utf16_string(string_data));
        input = remaining;
    }

    Ok((input, strings))
}
