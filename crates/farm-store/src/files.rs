//! Backup-then-replace file writes.
//!
//! Every save goes to a temp file in the same directory and is renamed over
//! the target, so a crash mid-write never leaves a half-written table. The
//! previous file version survives as `<name>.bak`.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::trace;

use crate::error::{Result, StoreError};

/// Serializes `rows` as a headered CSV file, replacing `path` atomically.
pub(crate) fn write_csv_atomic<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(&mut temp);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(StoreError::Io)?;
    }
    temp.flush()?;

    if path.exists() {
        let backup = path.with_extension("csv.bak");
        fs::copy(path, &backup)?;
    }
    temp.persist(path).map_err(|error| StoreError::Io(error.error))?;
    trace!(path = %path.display(), "replaced csv file");
    Ok(())
}

/// Loads a headered CSV file into typed rows; a missing file reads as empty.
pub(crate) fn read_csv_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
