use crate::utils::{
    nom_helper::{nom_data, nom_seek},
    strings::extract_narrowed_string,
};

/// Get the resources (DLLs and other files) loaded by the executable.
/// Entries are separated by two null bytes
pub(crate) fn get_resources(data: &[u8], offset: u32, length: u32) -> nom::IResult<&[u8], Vec<String>> {
    let (input, _) = nom_seek(data, offset as u64)?;
    let (input, table) = nom_data(input, length as u64)?;

    let mut resources: Vec<String> = split_double_null(table)
        .into_iter()
        .map(extract_narrowed_string)
        .collect();

    // The table ends with a delimiter, which leaves one empty entry behind
    if resources.last().is_some_and(|value| value.is_empty()) {
        resources.pop();
    }

    Ok((input, resources))
}

/// The executable name is the first entry of the fixed size name field
pub(crate) fn executable_name(data: &[u8]) -> String {
    split_double_null(data)
        .first()
        .map(|value| extract_narrowed_string(value))
        .unwrap_or_default()
}

/// Split bytes on every two byte null sequence, scanning left to right
fn split_double_null(data: &[u8]) -> Vec<&[u8]> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index + 1 < data.len() {
        if data[index] == 0 && data[index + 1] == 0 {
            segments.push(&data[start..index]);
            index += 2;
            start = index;
            continue;
        }
        index += 1;
    }
    segments.push(&data[start..]);
    segments
}
