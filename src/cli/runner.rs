//! CLI runner - executes commands

use super::commands::{AccountCommand, Cli, Commands};
use crate::account::{
    AccountCapabilitiesParams, AccountListParams, AccountParams, AccountRejectParams, Client,
};
use crate::config::ClientConfig;
use crate::http::ListParams;
use crate::pagination::PagedIterator;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!("Using config: {:?}", config);
        let client = Client::from_config(&config).context("Failed to build client")?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match &self.cli.command {
            Commands::Accounts(cmd) => run_account_command(&client, cmd, &mut out),
        }
    }

    /// Merge the config file with command-line overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => match &self.cli.api_key {
                Some(key) => ClientConfig::new(key.clone()),
                None => bail!("No API key: pass --api-key, set RESOURCE_API_KEY or use --config"),
            },
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key.clone_from(key);
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(level) = self.cli.log_level {
            config.log_level = level;
        }
        Ok(config)
    }
}

fn run_account_command(client: &Client, cmd: &AccountCommand, out: &mut impl Write) -> Result<()> {
    match cmd {
        AccountCommand::List { limit, max } => {
            let mut list = ListParams::new();
            list.limit = *limit;
            let iter = client.list(&AccountListParams::from(list));
            let written = emit_all(iter, *max, out)?;
            info!("Listed {} accounts", written);
        }
        AccountCommand::Get { id } => {
            let params = AccountParams::new();
            let account = match id {
                Some(id) => client.get_by_id(id, &params)?,
                None => client.get(&params)?,
            };
            emit(&account, out)?;
        }
        AccountCommand::Capabilities { id } => {
            let iter = client.capabilities(&AccountCapabilitiesParams::new(id));
            let written = emit_all(iter, None, out)?;
            info!("Listed {} capabilities of {}", written, id);
        }
        AccountCommand::Reject { id, reason } => {
            let account = client.reject(id, &AccountRejectParams::new(reason))?;
            emit(&account, out)?;
        }
    }
    Ok(())
}

/// Write each item as one JSON line, stopping after `max` items
fn emit_all<T: Serialize>(
    mut iter: PagedIterator<T>,
    max: Option<usize>,
    out: &mut impl Write,
) -> Result<usize> {
    let mut written = 0;
    while max.map_or(true, |m| written < m) && iter.advance() {
        if let Some(item) = iter.current() {
            emit(item, out)?;
            written += 1;
        }
    }
    if let Some(err) = iter.take_error() {
        return Err(err).context("Listing failed");
    }
    Ok(written)
}

fn emit<T: Serialize>(item: &T, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer(&mut *out, item)?;
    writeln!(out)?;
    Ok(())
}
