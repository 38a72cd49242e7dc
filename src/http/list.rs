//! List objects and the paginated fetch built on top of them

use super::backend::Backend;
use super::params::{FormParams, ListParams};
use crate::error::Result;
use crate::pagination::{Page, PagedIterator};
use crate::types::{Form, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Resources that carry a stable object ID usable as a cursor
pub trait Identified {
    /// Object ID, e.g. `acct_1032D82eZvKYlo2C`
    fn id(&self) -> &str;
}

/// Direction a listing walks through the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow `starting_after` cursors
    #[default]
    Forward,
    /// Follow `ending_before` cursors
    Backward,
}

/// A list object as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `"list"`
    #[serde(default)]
    pub object: String,
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Whether more items exist after this page
    #[serde(default)]
    pub has_more: bool,
    /// URL of the list endpoint
    #[serde(default)]
    pub url: Option<String>,
    /// Total size of the collection, when the endpoint reports it
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T: Identified> List<T> {
    /// Convert into a page whose continuation token is the cursor for the
    /// following request
    ///
    /// `cursor` is the one this page was requested with. An empty page that
    /// still reports `has_more` carries it over so the walk goes on.
    ///
    /// Backward listings return items oldest-first within a page; they are
    /// reversed here so a traversal keeps moving in one direction.
    pub fn into_page(self, direction: Direction, cursor: Option<&str>) -> Page<T> {
        let mut data = self.data;
        let next_token = match direction {
            _ if !self.has_more => None,
            Direction::Forward => data.last().map(|item| item.id().to_string()),
            Direction::Backward => data.first().map(|item| item.id().to_string()),
        }
        .or_else(|| cursor.filter(|_| self.has_more).map(str::to_string));
        if direction == Direction::Backward {
            data.reverse();
        }

        let page = Page::new(data, next_token);
        match self.url {
            Some(url) => page.with_url(url),
            None => page,
        }
    }
}

/// Build a lazy iterator over a list endpoint
///
/// The first request uses `params` as given; every following request
/// replaces the cursor parameter with the ID carried over from the previous
/// page. `extra` holds endpoint-specific filters sent with every request.
pub fn list_iter<T>(
    backend: Arc<dyn Backend>,
    key: impl Into<String>,
    path: impl Into<String>,
    params: ListParams,
    extra: Form,
) -> PagedIterator<T>
where
    T: DeserializeOwned + Identified + Send + 'static,
{
    let key = key.into();
    let path = path.into();
    let direction = if params.is_backward() {
        Direction::Backward
    } else {
        Direction::Forward
    };

    PagedIterator::new(move |token: Option<&str>| -> Result<Page<T>> {
        let mut params = params.clone();
        if let Some(token) = token {
            match direction {
                Direction::Forward => params.starting_after = Some(token.to_string()),
                Direction::Backward => params.ending_before = Some(token.to_string()),
            }
        }

        let cursor = match direction {
            Direction::Forward => params.starting_after.clone(),
            Direction::Backward => params.ending_before.clone(),
        };

        let mut form = params.to_form();
        form.extend(extra.iter().cloned());

        let body = backend.call(Method::GET, &path, &key, &form)?;
        let list: List<T> = serde_json::from_value(body)?;
        Ok(list.into_page(direction, cursor.as_deref()))
    })
}
