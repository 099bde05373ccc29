//! Shipping-label rows built from active orders.

use farm_model::{Customer, SenderProfile};

/// Korean column titles used by the courier's bulk-upload template.
pub const LABEL_COLUMNS: [&str; 8] = [
    "보내는분",
    "보내는전화",
    "보내는주소",
    "받는분",
    "받는전화",
    "받는주소",
    "수량",
    "메모",
];

/// One printable label line: sender block then recipient block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_addr: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub qty: u32,
    pub memo: String,
}

/// Builds label rows for every active order.
///
/// Empty per-record sender overrides are filled from the default profile,
/// and rows are sorted by the full sender triple then recipient so labels
/// from the same sender print together.
#[must_use]
pub fn build_labels(customers: &[Customer], default_sender: &SenderProfile) -> Vec<LabelRow> {
    let mut rows: Vec<LabelRow> = customers
        .iter()
        .filter(|c| c.ordered)
        .map(|c| LabelRow {
            sender_name: fallback(&c.sender_name, &default_sender.name),
            sender_phone: fallback(&c.sender_phone, &default_sender.phone),
            sender_addr: fallback(&c.sender_addr, &default_sender.addr),
            name: c.name.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            qty: c.qty,
            memo: c.memo.clone(),
        })
        .collect();
    // Sort on the same key the grouping uses, so every sender forms one
    // contiguous run even when two senders share a name.
    rows.sort_by(|a, b| {
        a.sender_name
            .cmp(&b.sender_name)
            .then_with(|| a.sender_phone.cmp(&b.sender_phone))
            .then_with(|| a.sender_addr.cmp(&b.sender_addr))
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Groups label rows by sender triple, preserving the sorted order.
#[must_use]
pub fn group_by_sender(rows: &[LabelRow]) -> Vec<((String, String, String), Vec<&LabelRow>)> {
    let mut groups: Vec<((String, String, String), Vec<&LabelRow>)> = Vec::new();
    for row in rows {
        let key = (
            row.sender_name.clone(),
            row.sender_phone.clone(),
            row.sender_addr.clone(),
        );
        match groups.last_mut() {
            Some((last, members)) if *last == key => members.push(row),
            _ => groups.push((key, vec![row])),
        }
    }
    groups
}

fn fallback(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
