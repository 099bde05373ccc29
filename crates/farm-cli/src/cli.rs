//! CLI argument definitions for the farm order manager.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "farm-orders",
    version,
    about = "Farm order manager - import order sheets, track orders, print shipping labels",
    long_about = "Track customers and orders for a small farm business.\n\n\
                  Imports customer records from arbitrary order spreadsheets by inferring\n\
                  the header row, accumulates shipment history, and exports courier-ready\n\
                  shipping-label spreadsheets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding the customer, history and sender CSV files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import customers from an order sheet (xlsx/xls/xlsm/csv).
    Import(ImportArgs),

    /// Register one customer manually.
    Add(AddArgs),

    /// Show the full customer table.
    List,

    /// Show active orders with count and box totals.
    Orders,

    /// Set or cancel one customer's order.
    Order(OrderArgs),

    /// Clear every order mark and quantity.
    Reset,

    /// Close the current order round into the shipment history.
    Close(CloseArgs),

    /// Show cumulative per-customer shipment totals.
    Stats(StatsArgs),

    /// Show or update the default sender profile.
    Sender(SenderArgs),

    /// Export the shipping-label spreadsheet for active orders.
    Labels(LabelsArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// The uploaded order sheet.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Customer name (must be non-empty).
    #[arg(long)]
    pub name: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Delivery address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Order quantity; zero registers the customer without an order.
    #[arg(long, default_value_t = 0)]
    pub qty: u32,

    /// Free-form memo.
    #[arg(long, default_value = "")]
    pub memo: String,
}

#[derive(Parser)]
pub struct OrderArgs {
    /// Customer name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Phone number, to disambiguate customers sharing a name.
    #[arg(long)]
    pub phone: Option<String>,

    /// Quantity to order.
    #[arg(long, conflicts_with = "cancel")]
    pub qty: Option<u32>,

    /// Cancel the customer's order instead.
    #[arg(long)]
    pub cancel: bool,
}

#[derive(Parser)]
pub struct CloseArgs {
    /// Close-out date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Delete the accumulated history instead of showing it.
    #[arg(long)]
    pub clear: bool,
}

#[derive(Parser)]
pub struct SenderArgs {
    /// New sender name.
    #[arg(long)]
    pub name: Option<String>,

    /// New sender phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// New sender address.
    #[arg(long)]
    pub addr: Option<String>,
}

#[derive(Parser)]
pub struct LabelsArgs {
    /// Output path for the label spreadsheet.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
