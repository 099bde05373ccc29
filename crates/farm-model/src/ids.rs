use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ModelError;

/// Opaque unique token identifying a customer record.
///
/// Rendered as a UUID string in persisted files; callers never inspect the
/// contents, only compare and display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier from its string form.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ModelError::InvalidId(value.to_string()))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(CustomerId::generate(), CustomerId::generate());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(CustomerId::parse("not-a-uuid").is_err());
        let id = CustomerId::generate();
        assert_eq!(CustomerId::parse(&id.to_string()).unwrap(), id);
    }
}
