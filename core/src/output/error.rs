use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormatError {
    Serialize,
    Output,
    UnknownFormat,
}

impl std::error::Error for FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Serialize => write!(f, "Failed to serialize data"),
            FormatError::Output => write!(f, "Failed to output data"),
            FormatError::UnknownFormat => write!(f, "Unknown output format"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LocalError {
    CreateDirectory,
    CreateFile,
    WriteFile,
}

impl std::error::Error for LocalError {}

impl fmt::Display for LocalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalError::CreateDirectory => write!(f, "Could not create output directory"),
            LocalError::CreateFile => write!(f, "Could not create output file"),
            LocalError::WriteFile => write!(f, "Could not write output file"),
        }
    }
}
