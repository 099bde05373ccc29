#![deny(unsafe_code)]

//! Shipping-label export.
//!
//! Turns the active orders into courier-ready label rows (sender block plus
//! recipient block) and writes them as a spreadsheet.

pub mod labels;
pub mod xlsx;

pub use labels::{LABEL_COLUMNS, LabelRow, build_labels, group_by_sender};
pub use xlsx::write_labels_xlsx;
