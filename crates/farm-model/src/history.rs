use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One closed-out order, appended to the shipment history at close time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub name: String,
    pub phone: String,
    pub qty: u32,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(date: NaiveDate, name: impl Into<String>, phone: impl Into<String>, qty: u32) -> Self {
        Self {
            date,
            name: name.into(),
            phone: phone.into(),
            qty,
        }
    }
}
