use crate::{
    output::{error::FormatError, local::local_output},
    structs::toml::Output,
    utils::uuid::generate_uuid,
};
use common::windows::PrefetchRecord;
use log::{error, info};

/// Output all records as a single `json` array
pub(crate) fn json_format(
    records: &[PrefetchRecord],
    output: &Output,
) -> Result<String, FormatError> {
    let data = match serde_json::to_vec(records) {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to serialize prefetch json: {err:?}");
            return Err(FormatError::Serialize);
        }
    };

    match local_output(&data, output, &generate_uuid(), "json") {
        Ok(path) => {
            info!("[core] prefetch json output success");
            Ok(path)
        }
        Err(err) => {
            error!("[core] Failed to output prefetch json: {err:?}");
            Err(FormatError::Output)
        }
    }
}
