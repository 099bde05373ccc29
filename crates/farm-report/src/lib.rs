#![deny(unsafe_code)]

//! Statistics over the customer table and shipment history.

use std::collections::BTreeMap;

use farm_model::{Customer, HistoryEntry};

/// Cumulative shipped quantity for one `(name, phone)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTotal {
    pub name: String,
    pub phone: String,
    pub total_qty: u64,
}

/// Aggregates history by `(name, phone)` and ranks by total quantity,
/// largest first. Ties break on name then phone so the ranking is stable
/// across runs.
#[must_use]
pub fn cumulative_totals(history: &[HistoryEntry]) -> Vec<CustomerTotal> {
    let mut totals: BTreeMap<(String, String), u64> = BTreeMap::new();
    for entry in history {
        *totals
            .entry((entry.name.clone(), entry.phone.clone()))
            .or_default() += u64::from(entry.qty);
    }
    let mut ranked: Vec<CustomerTotal> = totals
        .into_iter()
        .map(|((name, phone), total_qty)| CustomerTotal {
            name,
            phone,
            total_qty,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.total_qty
            .cmp(&a.total_qty)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.phone.cmp(&b.phone))
    });
    ranked
}

/// Current order round at a glance: active order count and box total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub orders: usize,
    pub boxes: u64,
}

#[must_use]
pub fn order_summary(customers: &[Customer]) -> OrderSummary {
    let mut summary = OrderSummary { orders: 0, boxes: 0 };
    for customer in customers.iter().filter(|c| c.ordered) {
        summary.orders += 1;
        summary.boxes += u64::from(customer.qty);
    }
    summary
}
