use crate::{
    artifacts::os::windows::prefetch::{parser::grab_prefetch, report::csv_rows},
    error::CollectionError,
    filesystem::files::read_file,
    output::{
        error::FormatError,
        formats::{csv::csv_format, json::json_format, jsonl::jsonl_format},
    },
    structs::toml::CollectionToml,
    utils::logging::create_log_file,
};
use common::windows::PrefetchRow;
use log::{error, info, warn};
use simplelog::{Config, WriteLogger};

/// Parse a TOML file at provided path
pub fn parse_toml_file(path: &str) -> Result<(), CollectionError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to read TOML file {path}: {err:?}");
            return Err(CollectionError::NoFile);
        }
    };

    parse_toml_data(&buffer)
}

/// Parse an already read TOML file
pub fn parse_toml_data(data: &[u8]) -> Result<(), CollectionError> {
    let collection = CollectionToml::parse_collection_toml(data)?;
    if !matches!(collection.output.format.as_str(), "json" | "jsonl" | "csv") {
        error!(
            "[core] Unsupported output format: {}",
            collection.output.format
        );
        return Err(CollectionError::BadToml);
    }

    match create_log_file(&collection.output) {
        Ok((log_file, level)) => {
            let _ = WriteLogger::init(level, Config::default(), log_file);
        }
        Err(err) => warn!("[core] Continuing without log file: {err:?}"),
    }

    prefetch_collection(&collection)
}

/// Decode every Prefetch file in the collection directory and write the output file
fn prefetch_collection(collection: &CollectionToml) -> Result<(), CollectionError> {
    let options = collection.prefetch.clone().unwrap_or_default();
    let records = match grab_prefetch(&options) {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to collect prefetch: {err:?}");
            return Err(CollectionError::Prefetch);
        }
    };
    info!("[core] Parsed {} prefetch files", records.len());

    let output = &collection.output;
    let output_result = match output.format.as_str() {
        "json" => json_format(&records, output),
        "jsonl" => jsonl_format(&records, output),
        "csv" => {
            let rows: Vec<PrefetchRow> = records.iter().flat_map(csv_rows).collect();
            csv_format(&rows, output)
        }
        _ => Err(FormatError::UnknownFormat),
    };

    match output_result {
        Ok(path) => {
            info!("[core] Prefetch collection written to {path}");
            Ok(())
        }
        Err(FormatError::Serialize) => {
            error!("[core] Failed to serialize prefetch collection");
            Err(CollectionError::Serialize)
        }
        Err(err) => {
            error!("[core] Failed to output prefetch collection: {err:?}");
            Err(CollectionError::Output)
        }
    }
}
