use crate::{
    output::{error::FormatError, local::local_output},
    structs::toml::Output,
    utils::uuid::generate_uuid,
};
use common::windows::PrefetchRow;
use csv::WriterBuilder;
use log::{error, info};

pub(crate) const CSV_HEADER: [&str; 4] =
    ["last_run_time", "executable_name", "path_hash", "run_count"];

/// Output flattened Prefetch rows as csv
pub(crate) fn csv_format(rows: &[PrefetchRow], output: &Output) -> Result<String, FormatError> {
    let data = csv_data(rows)?;

    match local_output(&data, output, &generate_uuid(), "csv") {
        Ok(path) => {
            info!("[core] prefetch csv output success");
            Ok(path)
        }
        Err(err) => {
            error!("[core] Failed to output prefetch csv: {err:?}");
            Err(FormatError::Output)
        }
    }
}

/// Write rows into csv bytes. The header is always written, even with no rows
pub(crate) fn csv_data(rows: &[PrefetchRow]) -> Result<Vec<u8>, FormatError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if let Err(err) = writer.write_record(CSV_HEADER) {
        error!("[core] Could not write csv header: {err:?}");
        return Err(FormatError::Serialize);
    }
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            error!("[core] Could not write csv row: {err:?}");
            return Err(FormatError::Serialize);
        }
    }

    match writer.into_inner() {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Could not finish csv data: {err:?}");
            Err(FormatError::Serialize)
        }
    }
}
