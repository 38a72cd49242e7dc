//! CLI commands and argument parsing

use crate::log::Level;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the accounts API
#[derive(Parser, Debug)]
#[command(name = "resource-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, global = true, env = "RESOURCE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Client log level: null, error, warn, info, debug
    #[arg(short, long, global = true)]
    pub log_level: Option<Level>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account operations
    #[command(subcommand)]
    Accounts(AccountCommand),
}

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// List accounts
    List {
        /// Page size requested from the API
        #[arg(long)]
        limit: Option<u32>,

        /// Stop after this many accounts
        #[arg(long)]
        max: Option<usize>,
    },

    /// Retrieve an account (the key's own account when no ID is given)
    Get {
        /// Account ID
        id: Option<String>,
    },

    /// List the capabilities of an account
    Capabilities {
        /// Account ID
        id: String,
    },

    /// Reject an account
    Reject {
        /// Account ID
        id: String,

        /// Reason: fraud, terms_of_service or other
        #[arg(long)]
        reason: String,
    },
}
