//! Pagination types
//!
//! Defines the page abstraction shared by every list endpoint.

/// One batch of items returned by a single fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in the order the API returned them
    pub items: Vec<T>,
    /// Cursor for the next fetch; `None` means the collection is exhausted
    pub next_token: Option<String>,
    /// Raw number of items returned by the fetch
    pub count: usize,
    /// URL of the list endpoint, when the API reports one
    pub url: Option<String>,
}

impl<T> Page<T> {
    /// Create a page that continues with `next_token`
    ///
    /// An empty token is treated the same as no token.
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        let count = items.len();
        Self {
            items,
            next_token: next_token.filter(|t| !t.is_empty()),
            count,
            url: None,
        }
    }

    /// Create the final page of a collection
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Attach the endpoint URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether another page follows this one
    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::last(Vec::new())
    }
}

/// Fetch function injected into a [`PagedIterator`](super::PagedIterator)
///
/// Receives the continuation token from the previous page (`None` on the
/// first call) and returns the next page or the fetch error.
pub type FetchFn<T, E> = Box<dyn FnMut(Option<&str>) -> std::result::Result<Page<T>, E> + Send>;
