//! Lazy cursor-based iterator over a remote collection
//!
//! The iterator holds at most one page in memory and fetches the next one
//! only once the buffered page has been consumed.

use super::types::{FetchFn, Page};
use crate::error::Error;
use tracing::{debug, trace};

/// Single-pass iterator that walks a paginated collection
///
/// Usage follows an `advance()` / `current()` protocol:
///
/// ```rust,ignore
/// let mut iter = PagedIterator::new(|token| fetch_page(token));
/// while iter.advance() {
///     println!("{:?}", iter.current());
/// }
/// if let Some(err) = iter.error() {
///     eprintln!("listing stopped: {err}");
/// }
/// ```
///
/// Once `advance()` has returned `false` the iterator is terminal and never
/// fetches again. Build a new iterator to walk the collection a second time.
pub struct PagedIterator<T, E = Error> {
    fetch: FetchFn<T, E>,
    page: Option<Page<T>>,
    /// Index of the current item in `page`; `None` until the page yields one
    index: Option<usize>,
    next_token: Option<String>,
    done: bool,
    error: Option<E>,
    fetches: usize,
}

impl<T, E> PagedIterator<T, E> {
    /// Create an iterator over the pages produced by `fetch`
    ///
    /// No fetch happens until the first call to [`advance`](Self::advance).
    pub fn new<F>(fetch: F) -> Self
    where
        F: FnMut(Option<&str>) -> std::result::Result<Page<T>, E> + Send + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            page: None,
            index: None,
            next_token: None,
            done: false,
            error: None,
            fetches: 0,
        }
    }

    /// Move to the next item, fetching a new page when needed
    ///
    /// Returns `true` when [`current`](Self::current) now points at an item.
    /// Returns `false` on exhaustion or when a fetch failed; in the latter
    /// case the error is available from [`error`](Self::error).
    pub fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }

        if let Some(page) = &self.page {
            let next = self.index.map_or(0, |i| i + 1);
            if next < page.items.len() {
                self.index = Some(next);
                return true;
            }
            if self.next_token.is_none() {
                self.finish();
                return false;
            }
        }

        // Empty intermediate pages are skipped as long as a token follows them
        loop {
            self.fetches += 1;
            debug!(
                "Fetching page {} (token: {:?})",
                self.fetches,
                self.next_token.as_deref()
            );

            match (self.fetch)(self.next_token.as_deref()) {
                Ok(page) => {
                    trace!("Fetched {} items, has_more={}", page.count, page.has_more());
                    self.next_token = page.next_token.clone().filter(|t| !t.is_empty());
                    let has_items = !page.items.is_empty();
                    self.page = Some(page);
                    self.index = None;

                    if has_items {
                        self.index = Some(0);
                        return true;
                    }
                    if self.next_token.is_none() {
                        self.finish();
                        return false;
                    }
                }
                Err(e) => {
                    self.error = Some(e);
                    self.finish();
                    return false;
                }
            }
        }
    }

    /// The item the iterator currently points at
    ///
    /// `None` before the first successful `advance()` and after exhaustion.
    pub fn current(&self) -> Option<&T> {
        let index = self.index?;
        self.page.as_ref()?.items.get(index)
    }

    /// The buffered page, as last returned by the fetch function
    pub fn page(&self) -> Option<&Page<T>> {
        self.page.as_ref()
    }

    /// The error that stopped iteration, if it failed rather than ran out
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Take ownership of the stopping error
    ///
    /// The iterator stays terminal afterwards.
    pub fn take_error(&mut self) -> Option<E> {
        self.error.take()
    }

    /// Whether the iterator has stopped, either exhausted or failed
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of times the fetch function has been invoked
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    /// Walk the remaining collection and gather every item
    ///
    /// Returns the fetch error if iteration stopped on one.
    pub fn collect_all(mut self) -> std::result::Result<Vec<T>, E>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        while self.advance() {
            if let Some(item) = self.current() {
                items.push(item.clone());
            }
        }
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(items),
        }
    }

    fn finish(&mut self) {
        self.done = true;
        self.index = None;
    }
}

impl<T, E> std::fmt::Debug for PagedIterator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedIterator")
            .field("buffered", &self.page.as_ref().map_or(0, Page::len))
            .field("index", &self.index)
            .field("next_token", &self.next_token)
            .field("done", &self.done)
            .field("failed", &self.error.is_some())
            .field("fetches", &self.fetches)
            .finish_non_exhaustive()
    }
}
