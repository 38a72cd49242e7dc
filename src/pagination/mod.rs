//! Pagination module
//!
//! # Overview
//!
//! List endpoints return one page of items at a time together with a
//! continuation token. [`PagedIterator`] hides that behind a sequential
//! `advance()` / `current()` view, fetching pages on demand through an
//! injected fetch function. Fetch errors stop the iteration and are
//! surfaced unchanged through [`PagedIterator::error`].

mod iter;
mod types;

pub use iter::PagedIterator;
pub use types::{FetchFn, Page};
