#![deny(unsafe_code)]

//! Header-inference importer.
//!
//! Takes a raw, headerless 2-D grid of spreadsheet cells, locates the most
//! plausible header row by fuzzy keyword matching, and extracts customer
//! records from the rows beneath it. Pure and synchronous: a function of the
//! grid and the fixed keyword table, with no I/O and no shared state.

pub mod detect;
pub mod error;
pub mod extract;
pub mod keywords;

pub use detect::{HeaderMatch, NAN_SENTINEL, SCAN_LIMIT, detect_header};
pub use error::ImportError;
pub use extract::{extract_records, import_records};
pub use keywords::{Field, KeywordTable};
