use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The destination could not be opened or written.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct PersistError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl PersistError {
    fn new(path: &Path, source: io::Error) -> Self {
        PersistError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write `values` to `path`, one decimal representation per line, in order.
/// Prior content at the destination is discarded. Partial output may remain
/// on disk when a write fails midway.
pub fn save_numbers(values: &[f64], path: &Path) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|e| PersistError::new(path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for value in values {
        writeln!(out, "{}", format_value(*value)).map_err(|e| PersistError::new(path, e))?;
    }
    out.flush().map_err(|e| PersistError::new(path, e))
}

/// Decimal text form; whole values keep one fractional digit.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
