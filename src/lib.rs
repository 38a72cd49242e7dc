// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Resource Client
//!
//! Client binding for a resource-oriented HTTP API (accounts, capabilities
//! and similarly shaped list resources).
//!
//! ## Features
//!
//! - **Lazy Pagination**: Walk list endpoints one page at a time with [`PagedIterator`]
//! - **Redacting Logger**: Leveled logging that masks API keys before output
//! - **Blocking Transport**: `reqwest`-based backend behind a swappable trait
//! - **Account Client**: Create, retrieve, update, delete, reject and list accounts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resource_client::account::{AccountListParams, Client};
//! use resource_client::{ClientConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("client.yaml")?;
//!     let client = Client::from_config(&config)?;
//!
//!     let mut accounts = client.list(&AccountListParams::new());
//!     while accounts.advance() {
//!         println!("{}", accounts.current().unwrap().id);
//!     }
//!     if let Some(err) = accounts.take_error() {
//!         return Err(err);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Resource clients (account)               │
//! │   create  get  get_by_id  update  delete  reject  list   │
//! └──────────────────────────────────────────────────────────┘
//!                │                               │
//! ┌──────────────┴──────────────┐  ┌─────────────┴─────────────┐
//! │            HTTP             │  │        Pagination         │
//! │  Backend / HttpBackend      │  │  Page, PagedIterator      │
//! │  FormParams, List, list_iter│  │  (fetch fn injected)      │
//! └─────────────────────────────┘  └───────────────────────────┘
//!                │
//! ┌──────────────┴──────────────┐
//! │             Log             │
//! │  LeveledLogger, Redactor    │
//! └─────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Leveled, redacting logger
pub mod log;

/// Lazy cursor-based pagination
pub mod pagination;

/// HTTP transport, form parameters and list fetching
pub mod http;

/// Client configuration
pub mod config;

/// Account resource client
pub mod account;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use log::{default_logger, set_default_logger, Level, LeveledLog, LeveledLogger};
pub use pagination::{Page, PagedIterator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
