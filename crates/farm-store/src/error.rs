use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("customer already exists: {name} ({phone})")]
    Duplicate { name: String, phone: String },
    #[error("no customer matches: {0}")]
    UnknownCustomer(String),
    #[error("ambiguous customer name: {0} (narrow it down with a phone number)")]
    AmbiguousCustomer(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
