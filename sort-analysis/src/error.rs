use std::{error, io, num::ParseIntError, path::PathBuf};

use derive_more::Display;

#[derive(Debug, Display)]
pub enum HarnessError {
    #[display(fmt = "{}", _0)]
    Usage(String),

    /// `--help` or `--version` was requested; the binary prints it and exits.
    #[display(fmt = "{}", _0)]
    Help(clap::Error),

    #[display(fmt = "Error reading file: {}", _1)]
    FileRead(PathBuf, io::Error),

    #[display(fmt = "Invalid number of lines {:?}: {}", _0, _1)]
    NumberFormat(String, ParseIntError),

    #[display(
        fmt = "Unsupported sorting algorithm {:?}, expected one of merge, quick, heap, bubble, transposition",
        _0
    )]
    InvalidAlgorithm(String),

    #[display(fmt = "Error writing {}: {}", "_0.display()", _1)]
    LogWrite(PathBuf, io::Error),

    #[display(fmt = "Error writing {}: {}", "_0.display()", _1)]
    SortedOutputWrite(PathBuf, io::Error),
}

impl error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HarnessError::FileRead(_, err)
            | HarnessError::LogWrite(_, err)
            | HarnessError::SortedOutputWrite(_, err) => Some(err),
            HarnessError::NumberFormat(_, err) => Some(err),
            HarnessError::Usage(_) | HarnessError::Help(_) | HarnessError::InvalidAlgorithm(_) => {
                None
            }
        }
    }
}
