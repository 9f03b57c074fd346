use super::error::FileSystemError;
use log::error;
use std::{
    fs::{metadata, read, read_dir},
    path::Path,
};

/// Get a list of all files in a provided directory. Subdirectories are not included
pub(crate) fn list_files(path: &str) -> Result<Vec<String>, FileSystemError> {
    if !is_directory(path) {
        return Err(FileSystemError::NotDirectory);
    }
    let dir_result = read_dir(path);
    let dir = match dir_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to get directory contents: {err:?}");
            return Err(FileSystemError::ReadDirectory);
        }
    };

    let mut files: Vec<String> = Vec::new();
    for entry_result in dir {
        let entry = match entry_result {
            Ok(result) => result,
            Err(err) => {
                error!("[core] Failed to get directory entry: {err:?}");
                continue;
            }
        };

        let full_path = entry.path().display().to_string();
        if !is_file(&full_path) {
            continue;
        }
        files.push(full_path);
    }

    Ok(files)
}

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}

/// Check if path is a directory
pub(crate) fn is_directory(path: &str) -> bool {
    Path::new(path).is_dir()
}

/// Read a file that is less than 2GB in size
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }

    match read(path) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Get the extension of a file if any
pub(crate) fn file_extension(path: &str) -> String {
    let file = Path::new(path);
    let extension = match file.extension() {
        Some(result) => result.to_str().unwrap_or(""),
        _ => "",
    };
    extension.to_string()
}

/// Get the file size. Zero if the path is not a file
pub(crate) fn get_file_size(path: &str) -> u64 {
    if !is_file(path) {
        return 0;
    }

    match metadata(path) {
        Ok(result) => result.len(),
        Err(err) => {
            error!("[core] Failed to get file size: {err:?}");
            0
        }
    }
}

/// Check if a provided file is larger than the default acceptable size (2GB)
fn file_too_large(path: &str) -> bool {
    let max_size = 2147483648; // 2GB
    get_file_size(path) >= max_size
}

#[cfg(test)]
mod tests {
    use super::{file_extension, get_file_size, is_directory, is_file, list_files, read_file};
    use crate::filesystem::error::FileSystemError;
    use std::path::PathBuf;

    #[test]
    fn test_list_files() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("src");

        let result = list_files(&test_location.display().to_string()).unwrap();
        assert!(result.iter().any(|entry| entry.ends_with("lib.rs")));
        assert!(result.iter().all(|entry| is_file(entry)));
    }

    #[test]
    fn test_list_files_not_directory() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("Cargo.toml");

        assert_eq!(
            list_files(&test_location.display().to_string()).unwrap_err(),
            FileSystemError::NotDirectory
        );
    }

    #[test]
    fn test_read_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("Cargo.toml");
        let path = test_location.display().to_string();

        let result = read_file(&path).unwrap();
        assert_eq!(result.len() as u64, get_file_size(&path));
        assert!(read_file("/this/path/does/not/exist.pf").is_err());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("C:\\Windows\\Prefetch\\CMD.EXE-AC113AA8.pf"), "pf");
        assert_eq!(file_extension("/tmp/Layout.ini"), "ini");
        assert_eq!(file_extension("/tmp/noext"), "");
    }

    #[test]
    fn test_is_directory() {
        assert!(is_directory(env!("CARGO_MANIFEST_DIR")));
        assert!(!is_file(env!("CARGO_MANIFEST_DIR")));
        assert_eq!(get_file_size(env!("CARGO_MANIFEST_DIR")), 0);
    }
}
