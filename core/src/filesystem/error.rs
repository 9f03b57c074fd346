use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FileSystemError {
    ReadDirectory,
    NotDirectory,
    ReadFile,
    LargeFile,
}

impl std::error::Error for FileSystemError {}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemError::ReadDirectory => write!(f, "Could not read directory path"),
            FileSystemError::NotDirectory => write!(f, "Not a directory"),
            FileSystemError::ReadFile => write!(f, "Could not read file"),
            FileSystemError::LargeFile => write!(f, "File larger than 2GB"),
        }
    }
}
