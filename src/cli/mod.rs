//! CLI module
//!
//! Command-line interface over the account client.
//!
//! # Commands
//!
//! - `accounts list` - Walk all accounts, one JSON document per line
//! - `accounts get` - Retrieve one account
//! - `accounts capabilities` - List an account's capabilities
//! - `accounts reject` - Reject an account

mod commands;
mod runner;

pub use commands::{AccountCommand, Cli, Commands};
pub use runner::Runner;
