use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::error::HarnessError;

/// Reads at most `limit` lines of the dataset, trimming each one. Bytes that
/// are not valid UTF-8 are decoded as U+FFFD instead of failing the read.
pub fn read_words(path: impl AsRef<Path>, limit: usize) -> Result<Vec<String>, HarnessError> {
    let path = path.as_ref();
    let to_error = |err| HarnessError::FileRead(path.to_path_buf(), err);

    let reader = BufReader::new(File::open(path).map_err(to_error)?);
    read_lines(reader, limit).map_err(to_error)
}

fn read_lines<R: BufRead>(reader: R, limit: usize) -> io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .take(limit)
        .map(|line| line.map(|line| String::from_utf8_lossy(&line).trim().to_owned()))
        .collect()
}
