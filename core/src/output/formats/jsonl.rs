use crate::{
    output::{error::FormatError, local::local_output},
    structs::toml::Output,
    utils::uuid::generate_uuid,
};
use common::windows::PrefetchRecord;
use log::{error, info};

/// Output each record as a separate `json` line
pub(crate) fn jsonl_format(
    records: &[PrefetchRecord],
    output: &Output,
) -> Result<String, FormatError> {
    let mut data = Vec::new();
    for record in records {
        match serde_json::to_vec(record) {
            Ok(mut result) => {
                data.append(&mut result);
                data.push(b'\n');
            }
            Err(err) => {
                error!("[core] Failed to serialize prefetch jsonl: {err:?}");
                return Err(FormatError::Serialize);
            }
        }
    }

    match local_output(&data, output, &generate_uuid(), "jsonl") {
        Ok(path) => {
            info!("[core] prefetch jsonl output success");
            Ok(path)
        }
        Err(err) => {
            error!("[core] Failed to output prefetch jsonl: {err:?}");
            Err(FormatError::Output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::jsonl_format;
    use crate::{output::formats::json::tests::test_record, structs::toml::Output};
    use std::fs::read_to_string;

    #[test]
    fn test_jsonl_format() {
        let output = Output {
            name: String::from("jsonl_format_test"),
            directory: String::from("./tmp"),
            format: String::from("jsonl"),
            logging: None,
        };
        let records = vec![
            test_record("7Z.EXE", &[1580003041]),
            test_record("CMD.EXE", &[1248562800]),
        ];
        let path = jsonl_format(&records, &output).unwrap();

        let text = read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(value["executable_name"], "CMD.EXE");
    }
}
