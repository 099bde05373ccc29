//! Library components of the farm order manager CLI.

pub mod logging;
