#![deny(unsafe_code)]

//! CSV-file persistence for the order manager.
//!
//! One directory, three files: the customer table, the shipment history and
//! the sender profile. Everything is loaded up front, mutated in memory and
//! written back with backup-then-atomic-replace.

mod files;

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{CUSTOMERS_FILE, CsvStore, HISTORY_FILE, MergeOutcome, SENDER_FILE};
