#![deny(unsafe_code)]

//! File decoding for the importer.
//!
//! Turns an uploaded order sheet into the raw cell grid the header-inference
//! importer consumes. Sheet selection is fixed to the first worksheet;
//! anything that prevents decoding surfaces as the importer's parse-error
//! class so the frontend shows a single human-readable message.

pub mod grid;

pub use grid::{read_grid, read_grid_from_csv, read_grid_from_workbook};
