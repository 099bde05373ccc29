#![deny(unsafe_code)]

pub mod customer;
pub mod error;
pub mod history;
pub mod ids;
pub mod sender;

pub use customer::Customer;
pub use error::{ModelError, Result};
pub use history::HistoryEntry;
pub use ids::CustomerId;
pub use sender::SenderProfile;
