//! Form parameter encoding
//!
//! Request parameters are sent as flat `key=value` pairs. Nested values use
//! bracketed keys: `metadata[order_id]=42`, `expand[]=data.account`.

use crate::types::{Form, Metadata};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode an identifier before splicing it into a URL path
pub fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Types that serialize into request form parameters
pub trait FormParams {
    /// Encode into ordered `(key, value)` pairs
    fn to_form(&self) -> Form;
}

impl FormParams for () {
    fn to_form(&self) -> Form {
        Form::new()
    }
}

/// Push `key=value` when `value` is present
pub fn push_opt<T: ToString>(form: &mut Form, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        form.push((key.to_string(), value.to_string()));
    }
}

/// Push `prefix[k]=v` for each metadata entry
pub fn push_map(form: &mut Form, prefix: &str, map: &Metadata) {
    for (k, v) in map {
        form.push((format!("{prefix}[{k}]"), v.clone()));
    }
}

/// Push `prefix[]=v` for each value
pub fn push_list(form: &mut Form, prefix: &str, values: &[String]) {
    for v in values {
        form.push((format!("{prefix}[]"), v.clone()));
    }
}

/// Pagination parameters shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size requested from the API
    pub limit: Option<u32>,
    /// Start after this object ID (forward pagination)
    pub starting_after: Option<String>,
    /// End before this object ID (backward pagination)
    pub ending_before: Option<String>,
    /// Related objects to expand in the response
    pub expand: Vec<String>,
}

impl ListParams {
    /// Create empty list parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start after the given object ID
    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// End before the given object ID
    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Expand a related object
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.expand.push(path.into());
        self
    }

    /// Whether this listing walks backwards through the collection
    pub fn is_backward(&self) -> bool {
        self.ending_before.is_some()
    }
}

impl FormParams for ListParams {
    fn to_form(&self) -> Form {
        let mut form = Form::new();
        push_opt(&mut form, "limit", self.limit.as_ref());
        push_opt(&mut form, "starting_after", self.starting_after.as_ref());
        push_opt(&mut form, "ending_before", self.ending_before.as_ref());
        push_list(&mut form, "expand", &self.expand);
        form
    }
}
