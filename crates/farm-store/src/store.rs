use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use farm_model::{Customer, CustomerId, HistoryEntry, SenderProfile};

use crate::error::{Result, StoreError};
use crate::files::{read_csv_rows, write_csv_atomic};

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const HISTORY_FILE: &str = "history.csv";
pub const SENDER_FILE: &str = "sender.csv";

/// Outcome of merging imported records into the customer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// The single logical store behind the whole tool: customer table, shipment
/// history, and the default sender profile, each persisted as one CSV file
/// under the data directory.
///
/// Mutations happen in memory; [`CsvStore::save`] replaces the files
/// atomically. Held and passed explicitly by whatever orchestrates UI or
/// import calls; there is no ambient global state.
#[derive(Debug)]
pub struct CsvStore {
    dir: PathBuf,
    customers: Vec<Customer>,
    history: Vec<HistoryEntry>,
    sender: SenderProfile,
}

impl CsvStore {
    /// Opens (and if necessary creates) the data directory and loads all
    /// three tables. Missing files read as empty state; the sender profile
    /// falls back to the farm default.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let mut customers: Vec<Customer> = read_csv_rows(&dir.join(CUSTOMERS_FILE))?;
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        let history = read_csv_rows(&dir.join(HISTORY_FILE))?;
        let sender = read_csv_rows::<SenderProfile>(&dir.join(SENDER_FILE))?
            .into_iter()
            .next()
            .unwrap_or_default();
        debug!(
            customers = customers.len(),
            history = history.len(),
            dir = %dir.display(),
            "opened store"
        );
        Ok(Self {
            dir,
            customers,
            history,
            sender,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Customers with an active order mark.
    pub fn active_orders(&self) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.ordered).collect()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn sender(&self) -> &SenderProfile {
        &self.sender
    }

    pub fn set_sender(&mut self, sender: SenderProfile) {
        self.sender = sender;
    }

    /// The `(name, phone)` pairs already present, for duplicate suppression.
    pub fn existing_keys(&self) -> BTreeSet<(String, String)> {
        self.customers
            .iter()
            .map(|c| (c.name.clone(), c.phone.clone()))
            .collect()
    }

    /// Merges imported records, silently dropping `(name, phone)` pairs that
    /// already exist. The importer itself never deduplicates.
    pub fn append_customers(&mut self, records: Vec<Customer>) -> MergeOutcome {
        let mut keys = self.existing_keys();
        let mut outcome = MergeOutcome {
            added: 0,
            skipped: 0,
        };
        for record in records {
            let key = (record.name.clone(), record.phone.clone());
            if keys.contains(&key) {
                outcome.skipped += 1;
                continue;
            }
            keys.insert(key);
            self.customers.push(record);
            outcome.added += 1;
        }
        info!(added = outcome.added, skipped = outcome.skipped, "merged records");
        outcome
    }

    /// Registers one customer; unlike bulk merge, a duplicate here is an
    /// error the caller reports.
    pub fn add_customer(&mut self, record: Customer) -> Result<()> {
        if self
            .customers
            .iter()
            .any(|c| c.dedup_key() == record.dedup_key())
        {
            return Err(StoreError::Duplicate {
                name: record.name,
                phone: record.phone,
            });
        }
        self.customers.push(record);
        Ok(())
    }

    /// Resolves a customer by name, narrowed by phone when several share it.
    pub fn find_customer(&self, name: &str, phone: Option<&str>) -> Result<CustomerId> {
        let matches: Vec<&Customer> = self
            .customers
            .iter()
            .filter(|c| c.name == name && phone.is_none_or(|p| c.phone == p))
            .collect();
        match matches.as_slice() {
            [] => Err(StoreError::UnknownCustomer(name.to_string())),
            [only] => Ok(only.id),
            _ => Err(StoreError::AmbiguousCustomer(name.to_string())),
        }
    }

    /// Sets the order quantity, keeping the checkbox consistent: a positive
    /// quantity marks the order, zero clears it.
    pub fn set_order(&mut self, id: CustomerId, qty: u32) -> Result<()> {
        let customer = self.customer_mut(id)?;
        customer.qty = qty;
        customer.ordered = qty > 0;
        Ok(())
    }

    /// Flips the order mark, keeping the quantity consistent: checking an
    /// order with zero quantity bumps it to one, unchecking zeroes it.
    pub fn mark_ordered(&mut self, id: CustomerId, ordered: bool) -> Result<()> {
        let customer = self.customer_mut(id)?;
        customer.ordered = ordered;
        if ordered && customer.qty == 0 {
            customer.qty = 1;
        } else if !ordered {
            customer.qty = 0;
        }
        Ok(())
    }

    /// Clears every order mark and quantity.
    pub fn reset_orders(&mut self) {
        for customer in &mut self.customers {
            customer.ordered = false;
            customer.qty = 0;
        }
    }

    /// Closes out the current order round: appends one history entry per
    /// active order, then resets the order state. Returns how many orders
    /// were recorded.
    pub fn close_orders(&mut self, date: NaiveDate) -> usize {
        let mut closed = 0usize;
        for customer in &mut self.customers {
            if !customer.ordered {
                continue;
            }
            self.history.push(HistoryEntry::new(
                date,
                customer.name.clone(),
                customer.phone.clone(),
                customer.qty,
            ));
            customer.ordered = false;
            customer.qty = 0;
            closed += 1;
        }
        info!(closed, %date, "closed order round");
        closed
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Persists all three tables with backup-then-replace semantics.
    /// Customers are kept sorted by name on disk.
    pub fn save(&mut self) -> Result<()> {
        self.customers.sort_by(|a, b| a.name.cmp(&b.name));
        write_csv_atomic(&self.dir.join(CUSTOMERS_FILE), &self.customers)?;
        write_csv_atomic(&self.dir.join(HISTORY_FILE), &self.history)?;
        write_csv_atomic(&self.dir.join(SENDER_FILE), std::slice::from_ref(&self.sender))?;
        Ok(())
    }

    fn customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::UnknownCustomer(id.to_string()))
    }
}
