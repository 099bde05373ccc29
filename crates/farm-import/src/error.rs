//! Error types for import operations.

use thiserror::Error;

/// Why an import produced no records.
///
/// Every variant renders as a message suitable for direct display to the
/// end user; none of them is fatal to the host process and re-invoking the
/// import with the same or another file is always safe.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No scanned row produced a column mapping containing at least a name
    /// or phone column.
    #[error("could not find where the data starts in this sheet")]
    HeaderNotFound,
    /// A header row was located but no row beneath it carried a usable name.
    #[error("found the header row, but no customer rows beneath it")]
    NoDataExtracted,
    /// The file could not be decoded into a cell grid at all.
    #[error("could not analyze the file: {0}")]
    Parse(String),
}
