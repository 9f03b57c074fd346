use pfcore::{
    compression::{CompressionError, Expander},
    core::parse_toml_file,
    prefetch::{
        classify_reader, csv_rows, execution_timeline, parse_prefetch, parse_prefetch_with,
        read_directory, PrefetchError, PrefetchFormat,
    },
};
use std::{
    fs::{create_dir_all, read_dir, read_to_string, write},
    io::{Cursor, Seek},
    path::PathBuf,
};

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn utf16(value: &str) -> Vec<u8> {
    value
        .encode_utf16()
        .flat_map(|wide_char| wide_char.to_le_bytes())
        .collect()
}

/// Windows XP style record with a single filename string and no metrics, trace chains or volumes
fn xp_record(name: &str, path_hash: u32, filetime: u64) -> Vec<u8> {
    let mut data = vec![0; 84 + 68];
    put_u32(&mut data, 0, 17);
    put_u32(&mut data, 4, 0x41434353);
    for (index, value) in utf16(name).iter().enumerate() {
        data[16 + index] = *value;
    }
    put_u32(&mut data, 76, path_hash);

    let info = 84;
    let sections = data.len() as u32;
    put_u32(&mut data, info, sections);
    put_u32(&mut data, info + 8, sections);
    put_u32(&mut data, info + 16, sections);
    data[info + 36..info + 44].copy_from_slice(&filetime.to_le_bytes());
    put_u32(&mut data, info + 60, 3);

    data.extend(utf16("\\WINDOWS\\SYSTEM32\\NTDLL.DLL"));
    data.extend_from_slice(&[0, 0]);
    let strings_length = data.len() as u32 - sections;
    put_u32(&mut data, info + 20, strings_length);
    let volumes_offset = data.len() as u32;
    put_u32(&mut data, info + 24, volumes_offset);

    let size = data.len() as u32;
    put_u32(&mut data, 12, size);
    data
}

#[test]
fn test_parse_prefetch_xp() {
    let data = xp_record("NOTEPAD.EXE", 0x336f3a4e, 128930364000000000);
    let record = parse_prefetch(&data).unwrap();

    assert_eq!(record.format_version, 17);
    assert_eq!(record.executable_name, "NOTEPAD.EXE");
    assert_eq!(record.run_count, 3);
    assert_eq!(record.resources, vec!["\\WINDOWS\\SYSTEM32\\NTDLL.DLL"]);
    assert!(record.volumes.is_empty());

    let rows = csv_rows(&record);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].last_run_time, "2009-07-25T23:00:00.000Z");
    assert_eq!(rows[0].path_hash, "336f3a4e");
}

#[test]
fn test_classify_reader_rewinds() {
    let data = xp_record("NOTEPAD.EXE", 0x336f3a4e, 128930364000000000);
    let mut reader = Cursor::new(data);
    reader.seek(std::io::SeekFrom::Start(40)).unwrap();

    assert_eq!(classify_reader(&mut reader).unwrap(), PrefetchFormat::Version17);
    assert_eq!(reader.stream_position().unwrap(), 0);
}

struct FixedExpander {
    output: Vec<u8>,
}

impl Expander for FixedExpander {
    fn expand(&self, _payload: &[u8], algorithm: u8, _size: u32) -> Result<Vec<u8>, CompressionError> {
        if algorithm != 2 {
            return Err(CompressionError::UnsupportedAlgorithm);
        }
        Ok(self.output.clone())
    }
}

#[test]
fn test_parse_prefetch_custom_expander() {
    let record = xp_record("NOTEPAD.EXE", 0x336f3a4e, 128930364000000000);
    let mut container = vec![0x4d, 0x41, 0x4d, 2];
    container.extend_from_slice(&(record.len() as u32).to_le_bytes());
    container.extend_from_slice(b"payload");

    // Compressed files only ever hold version 30 records
    let expander = FixedExpander {
        output: record.clone(),
    };
    assert_eq!(
        parse_prefetch_with(&container, &expander).unwrap_err(),
        PrefetchError::UnknownFormat
    );

    let short = FixedExpander {
        output: record[..100].to_vec(),
    };
    assert_eq!(
        parse_prefetch_with(&container, &short).unwrap_err(),
        PrefetchError::DecompressionFailed
    );

    container[3] = 5;
    assert_eq!(
        parse_prefetch_with(&container, &expander).unwrap_err(),
        PrefetchError::DecompressionFailed
    );
}

#[test]
fn test_read_directory_timeline() {
    let path = "./tmp/prefetch_tester_timeline";
    create_dir_all(path).unwrap();
    write(
        format!("{path}/NOTEPAD.EXE-336F3A4E.pf"),
        xp_record("NOTEPAD.EXE", 0x336f3a4e, 128930364000000000),
    )
    .unwrap();
    write(
        format!("{path}/CALC.EXE-0FE8F3A9.pf"),
        xp_record("CALC.EXE", 0x0fe8f3a9, 132245784418940000),
    )
    .unwrap();

    let records = read_directory(path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].executable_name, "CALC.EXE");

    let timeline = execution_timeline(&records);
    assert_eq!(timeline[0].executable_name, "CALC.EXE");
    assert_eq!(timeline[0].path_hash, "fe8f3a9");
    assert_eq!(timeline[1].executable_name, "NOTEPAD.EXE");
}

#[test]
fn test_prefetch_collection() {
    let path = "./tmp/prefetch_tester";
    create_dir_all(path).unwrap();
    write(
        format!("{path}/NOTEPAD.EXE-336F3A4E.pf"),
        xp_record("NOTEPAD.EXE", 0x336f3a4e, 128930364000000000),
    )
    .unwrap();

    let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_location.push("tests/test_data/prefetch.toml");
    parse_toml_file(&test_location.display().to_string()).unwrap();

    let output = read_dir("./tmp/prefetch_tester_output")
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|entry| entry.extension().is_some_and(|ext| ext == "jsonl"))
        .unwrap();
    let text = read_to_string(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(value["executable_name"], "NOTEPAD.EXE");
    assert_eq!(value["run_count"], 3);
}
