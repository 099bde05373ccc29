use serde::{Deserialize, Serialize};

use crate::{CustomerId, ModelError};

/// One customer row in the persistent table.
///
/// Sender fields are per-record overrides of the default sender profile and
/// stay empty until the user edits a shipping label. The struct is kept flat
/// so it maps 1:1 onto a CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub ordered: bool,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub qty: u32,
    pub memo: String,
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_addr: String,
}

impl Customer {
    /// Builds a record with a fresh id and empty sender overrides.
    ///
    /// `ordered` is derived from the quantity. Fails when the name trims to
    /// nothing, since the `(name, phone)` pair is the record's natural key.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        qty: u32,
        memo: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            id: CustomerId::generate(),
            ordered: qty > 0,
            name,
            phone: phone.into(),
            address: address.into(),
            qty,
            memo: memo.into(),
            sender_name: String::new(),
            sender_phone: String::new(),
            sender_addr: String::new(),
        })
    }

    /// Key used for duplicate suppression across imports and manual adds.
    #[must_use]
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.name, &self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_ordered_from_qty() {
        let active = Customer::new("김영희", "010-3333-4444", "", 3, "").unwrap();
        assert!(active.ordered);
        let idle = Customer::new("김영희", "010-3333-4444", "", 0, "").unwrap();
        assert!(!idle.ordered);
    }

    #[test]
    fn rejects_blank_name() {
        assert!(Customer::new("   ", "010", "", 1, "").is_err());
    }

    #[test]
    fn trims_name() {
        let c = Customer::new("  홍길동 ", "", "", 0, "").unwrap();
        assert_eq!(c.name, "홍길동");
    }
}
