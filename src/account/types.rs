//! Account and capability resources and their request parameters

use crate::http::{push_list, push_map, push_opt, FormParams, Identified, List, ListParams};
use crate::types::{Form, Metadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Resources
// ============================================================================

/// A connected account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, e.g. `acct_1032D82eZvKYlo2C`
    pub id: String,
    /// Always `"account"`
    #[serde(default)]
    pub object: String,
    /// Account type (`standard`, `express`, `custom`)
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    /// Business type (`individual`, `company`, ...)
    #[serde(default)]
    pub business_type: Option<String>,
    /// Two-letter country code
    #[serde(default)]
    pub country: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Three-letter default currency
    #[serde(default)]
    pub default_currency: Option<String>,
    #[serde(default)]
    pub charges_enabled: bool,
    #[serde(default)]
    pub payouts_enabled: bool,
    #[serde(default)]
    pub details_submitted: bool,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Set on the object returned by a delete call
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Identified for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Status of a capability on an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityStatus {
    Active,
    Disabled,
    #[default]
    Inactive,
    Pending,
    Unrequested,
    /// Status introduced by the API after this client was written
    #[serde(other)]
    Unknown,
}

/// A capability (e.g. `card_payments`) of a connected account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// Capability name, e.g. `card_payments`
    pub id: String,
    #[serde(default)]
    pub object: String,
    /// ID of the owning account
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub requested: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: CapabilityStatus,
}

impl Identified for Capability {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of accounts as returned by the list endpoint
pub type AccountList = List<Account>;

/// A page of capabilities as returned by the list endpoint
pub type CapabilityList = List<Capability>;

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for creating, retrieving, updating and deleting accounts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountParams {
    pub account_type: Option<String>,
    pub business_type: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub default_currency: Option<String>,
    pub metadata: Metadata,
    pub expand: Vec<String>,
}

impl AccountParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account type
    #[must_use]
    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    /// Set the country
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the email
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Add a metadata entry
    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl FormParams for AccountParams {
    fn to_form(&self) -> Form {
        let mut form = Form::new();
        push_opt(&mut form, "type", self.account_type.as_ref());
        push_opt(&mut form, "business_type", self.business_type.as_ref());
        push_opt(&mut form, "country", self.country.as_ref());
        push_opt(&mut form, "email", self.email.as_ref());
        push_opt(&mut form, "default_currency", self.default_currency.as_ref());
        push_map(&mut form, "metadata", &self.metadata);
        push_list(&mut form, "expand", &self.expand);
        form
    }
}

/// Parameters for listing accounts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountListParams {
    pub list: ListParams,
}

impl AccountListParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<ListParams> for AccountListParams {
    fn from(list: ListParams) -> Self {
        Self { list }
    }
}

/// Parameters for rejecting an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRejectParams {
    /// `fraud`, `terms_of_service` or `other`
    pub reason: String,
}

impl AccountRejectParams {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl FormParams for AccountRejectParams {
    fn to_form(&self) -> Form {
        vec![("reason".to_string(), self.reason.clone())]
    }
}

/// Parameters for listing the capabilities of one account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountCapabilitiesParams {
    /// Account whose capabilities are listed
    pub account: String,
    pub list: ListParams,
}

impl AccountCapabilitiesParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            list: ListParams::default(),
        }
    }
}
