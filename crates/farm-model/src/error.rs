use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("customer name must not be empty")]
    EmptyName,
    #[error("invalid customer id: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
