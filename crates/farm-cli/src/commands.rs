use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span};

use farm_import::{KeywordTable, import_records};
use farm_ingest::read_grid;
use farm_model::{Customer, SenderProfile};
use farm_output::{build_labels, group_by_sender, write_labels_xlsx};
use farm_report::{cumulative_totals, order_summary};
use farm_store::CsvStore;

use crate::cli::{AddArgs, CloseArgs, ImportArgs, LabelsArgs, OrderArgs, SenderArgs, StatsArgs};
use crate::tables::{customer_table, label_group_table, stats_table};

pub fn run_import(args: &ImportArgs, data_dir: &Path) -> Result<()> {
    let span = info_span!("import", file = %args.file.display());
    let _guard = span.enter();

    // Either the whole sheet imports or nothing does; the store is only
    // touched once a full record list exists.
    let grid = read_grid(&args.file)?;
    let records = import_records(&grid, &KeywordTable::default())?;
    let total = records.len();

    let mut store = CsvStore::open(data_dir)?;
    let outcome = store.append_customers(records);
    store.save().context("save store")?;

    if outcome.added == 0 {
        println!("All {total} records already exist; nothing added.");
    } else if outcome.skipped > 0 {
        println!(
            "Imported {} of {total} records ({} duplicates skipped).",
            outcome.added, outcome.skipped
        );
    } else {
        println!("Imported {} records.", outcome.added);
    }
    Ok(())
}

pub fn run_add(args: &AddArgs, data_dir: &Path) -> Result<()> {
    let record = Customer::new(&args.name, &args.phone, &args.address, args.qty, &args.memo)?;
    let name = record.name.clone();
    let mut store = CsvStore::open(data_dir)?;
    store.add_customer(record)?;
    store.save().context("save store")?;
    println!("Registered {name}.");
    Ok(())
}

pub fn run_list(data_dir: &Path) -> Result<()> {
    let store = CsvStore::open(data_dir)?;
    if store.customers().is_empty() {
        println!("No customers yet.");
        return Ok(());
    }
    println!("{}", customer_table(store.customers()));
    Ok(())
}

pub fn run_orders(data_dir: &Path) -> Result<()> {
    let store = CsvStore::open(data_dir)?;
    let summary = order_summary(store.customers());
    println!("Active orders: {} ({} boxes)", summary.orders, summary.boxes);
    let active: Vec<Customer> = store.active_orders().into_iter().cloned().collect();
    if !active.is_empty() {
        println!("{}", customer_table(&active));
    }
    Ok(())
}

pub fn run_order(args: &OrderArgs, data_dir: &Path) -> Result<()> {
    let mut store = CsvStore::open(data_dir)?;
    let id = store.find_customer(&args.name, args.phone.as_deref())?;
    if args.cancel {
        store.mark_ordered(id, false)?;
        println!("Cancelled order for {}.", args.name);
    } else {
        let Some(qty) = args.qty else {
            bail!("pass --qty N to set an order, or --cancel to clear it");
        };
        store.set_order(id, qty)?;
        if qty > 0 {
            println!("Ordered {qty} boxes for {}.", args.name);
        } else {
            println!("Cleared order for {}.", args.name);
        }
    }
    store.save().context("save store")?;
    Ok(())
}

pub fn run_reset(data_dir: &Path) -> Result<()> {
    let mut store = CsvStore::open(data_dir)?;
    store.reset_orders();
    store.save().context("save store")?;
    println!("All order marks cleared.");
    Ok(())
}

pub fn run_close(args: &CloseArgs, data_dir: &Path) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mut store = CsvStore::open(data_dir)?;
    let closed = store.close_orders(date);
    if closed == 0 {
        println!("No active orders to close.");
        return Ok(());
    }
    store.save().context("save store")?;
    println!("Closed {closed} orders into history ({date}).");
    Ok(())
}

pub fn run_stats(args: &StatsArgs, data_dir: &Path) -> Result<()> {
    let mut store = CsvStore::open(data_dir)?;
    if args.clear {
        store.clear_history();
        store.save().context("save store")?;
        println!("Shipment history cleared.");
        return Ok(());
    }
    let totals = cumulative_totals(store.history());
    if totals.is_empty() {
        println!("No shipment history yet.");
        return Ok(());
    }
    println!("{}", stats_table(&totals));
    Ok(())
}

pub fn run_sender(args: &SenderArgs, data_dir: &Path) -> Result<()> {
    let mut store = CsvStore::open(data_dir)?;
    if args.name.is_none() && args.phone.is_none() && args.addr.is_none() {
        let sender = store.sender();
        println!("Sender: {} ({})", sender.name, sender.phone);
        println!("Address: {}", sender.addr);
        return Ok(());
    }
    let current = store.sender().clone();
    store.set_sender(SenderProfile {
        name: args.name.clone().unwrap_or(current.name),
        phone: args.phone.clone().unwrap_or(current.phone),
        addr: args.addr.clone().unwrap_or(current.addr),
    });
    store.save().context("save store")?;
    println!("Sender profile saved.");
    Ok(())
}

pub fn run_labels(args: &LabelsArgs, data_dir: &Path) -> Result<()> {
    let store = CsvStore::open(data_dir)?;
    let rows = build_labels(store.customers(), store.sender());
    if rows.is_empty() {
        println!("No active orders; nothing to export.");
        return Ok(());
    }

    for ((name, phone, addr), members) in group_by_sender(&rows) {
        println!("From: {name} ({phone}) - {addr}");
        println!("{}", label_group_table(&members));
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| format!("labels_{}.xlsx", Local::now().format("%m%d")).into());
    write_labels_xlsx(&rows, &out)?;
    info!(labels = rows.len(), "label export finished");
    println!("Wrote {} labels to {}.", rows.len(), out.display());
    Ok(())
}
