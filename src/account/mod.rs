//! Account resource client
//!
//! Wraps the `/v1/accounts` endpoints: create, retrieve, update, delete and
//! reject accounts, plus paginated listings of accounts and of an account's
//! capabilities.
//!
//! ```rust,ignore
//! let client = Client::from_config(&config)?;
//! let mut iter = client.list(&AccountListParams::new());
//! while iter.advance() {
//!     let account = iter.current().unwrap();
//!     println!("{}", account.id);
//! }
//! ```

mod client;
mod types;

pub use client::{AccountIter, CapabilityIter, Client};
pub use types::{
    Account, AccountCapabilitiesParams, AccountList, AccountListParams, AccountParams,
    AccountRejectParams, Capability, CapabilityList, CapabilityStatus,
};

#[cfg(test)]
mod tests;
