//! Client for the `/v1/accounts` endpoints

use super::types::{
    Account, AccountCapabilitiesParams, AccountListParams, AccountParams, AccountRejectParams,
    Capability,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{escape_path_segment, list_iter, Backend, FormParams, HttpBackend};
use crate::log::{LeveledLog, LeveledLogger};
use crate::pagination::PagedIterator;
use crate::types::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Iterator over accounts
pub type AccountIter = PagedIterator<Account>;

/// Iterator over the capabilities of an account
pub type CapabilityIter = PagedIterator<Capability>;

/// Invokes the account APIs through a backend with a fixed API key
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    key: String,
}

impl Client {
    /// Create a client over `backend`, authenticating with `key`
    pub fn new(backend: Arc<dyn Backend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Create a client over an [`HttpBackend`] built from `config`
    ///
    /// The backend logs at `config.log_level`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let logger: Arc<dyn LeveledLog> = Arc::new(LeveledLogger::new(config.log_level));
        let backend = HttpBackend::with_config(config.backend_config())?.with_logger(logger);
        Ok(Self::new(Arc::new(backend), config.api_key.clone()))
    }

    /// Create an account
    pub fn create(&self, params: &AccountParams) -> Result<Account> {
        self.call(Method::POST, "/v1/accounts", params)
    }

    /// Retrieve the account that owns the API key
    pub fn get(&self, params: &AccountParams) -> Result<Account> {
        self.call(Method::GET, "/v1/account", params)
    }

    /// Retrieve an account by ID
    pub fn get_by_id(&self, id: &str, params: &AccountParams) -> Result<Account> {
        self.call(Method::GET, &account_path(id), params)
    }

    /// Update an account's properties
    pub fn update(&self, id: &str, params: &AccountParams) -> Result<Account> {
        self.call(Method::POST, &account_path(id), params)
    }

    /// Delete an account
    ///
    /// The returned object has `deleted` set.
    pub fn delete(&self, id: &str, params: &AccountParams) -> Result<Account> {
        self.call(Method::DELETE, &account_path(id), params)
    }

    /// Reject an account, e.g. for suspected fraud
    pub fn reject(&self, id: &str, params: &AccountRejectParams) -> Result<Account> {
        let path = format!("{}/reject", account_path(id));
        self.call(Method::POST, &path, params)
    }

    /// List the capabilities of an account
    pub fn capabilities(&self, params: &AccountCapabilitiesParams) -> CapabilityIter {
        let path = format!("{}/capabilities", account_path(&params.account));
        list_iter(
            Arc::clone(&self.backend),
            self.key.clone(),
            path,
            params.list.clone(),
            Vec::new(),
        )
    }

    /// List accounts
    pub fn list(&self, params: &AccountListParams) -> AccountIter {
        list_iter(
            Arc::clone(&self.backend),
            self.key.clone(),
            "/v1/accounts",
            params.list.clone(),
            Vec::new(),
        )
    }

    fn call<T, P>(&self, method: Method, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: FormParams,
    {
        let body = self
            .backend
            .call(method, path, &self.key, &params.to_form())?;
        Ok(serde_json::from_value(body)?)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

fn account_path(id: &str) -> String {
    format!("/v1/accounts/{}", escape_path_segment(id))
}
