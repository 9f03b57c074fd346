use super::uuid::generate_uuid;
use crate::{error::CollectionError, structs::toml::Output};
use log::{error, LevelFilter};
use std::fs::{create_dir_all, File};

/// Create log output file and logging level based on TOML `Output` configuration
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), CollectionError> {
    let path = format!("{}/{}", output.directory, output.name);
    let result = create_dir_all(&path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[core] Failed to create logging output directory for {path}. Error: {err:?}");
            return Err(CollectionError::CreateDirectory);
        }
    }

    let output_result = File::create(format!("{path}/{}.log", generate_uuid()));
    let log_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to create log file at {path}. Error: {err:?}");
            return Err(CollectionError::LogFile);
        }
    };

    Ok((log_file, log_level(output.logging.as_deref())))
}

/// Map a configured level name to a filter. Unknown or missing values are `Warn`
pub(crate) fn log_level(level: Option<&str>) -> LevelFilter {
    match level.map(str::to_lowercase).as_deref() {
        Some("error") => LevelFilter::Error,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::{create_log_file, log_level};
    use crate::structs::toml::Output;
    use log::LevelFilter;

    #[test]
    fn test_create_log_file() {
        let output = Output {
            name: String::from("logging_test"),
            directory: String::from("./tmp"),
            format: String::from("json"),
            logging: Some(String::from("DEBUG")),
        };
        let (_, level) = create_log_file(&output).unwrap();
        assert_eq!(level, LevelFilter::Debug);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(None), LevelFilter::Warn);
        assert_eq!(log_level(Some("error")), LevelFilter::Error);
        assert_eq!(log_level(Some("Info")), LevelFilter::Info);
        assert_eq!(log_level(Some("trace")), LevelFilter::Warn);
    }
}
