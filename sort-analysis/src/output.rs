use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::HarnessError, harness::Report};

/// Appends the report's log line to the analysis file, creating it if needed.
pub fn append_log(path: impl AsRef<Path>, report: &Report) -> Result<(), HarnessError> {
    let path = path.as_ref();
    let to_error = |err| HarnessError::LogWrite(path.to_path_buf(), err);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    writeln!(file, "{}", report.log_line()).map_err(to_error)
}

/// Overwrites `path` with one word per line.
pub fn write_sorted(path: impl AsRef<Path>, words: &[String]) -> Result<(), HarnessError> {
    let path = path.as_ref();
    let to_error = |err| HarnessError::SortedOutputWrite(path.to_path_buf(), err);

    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    for word in words {
        writeln!(writer, "{word}").map_err(to_error)?;
    }
    writer.flush().map_err(to_error)
}
