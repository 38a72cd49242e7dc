//! HTTP transport module
//!
//! Everything resource clients need to reach the API:
//!
//! - **Backend**: the [`Backend`] trait and its blocking [`HttpBackend`]
//! - **Parameters**: form encoding for request and list parameters
//! - **Lists**: wire list objects and [`list_iter`], which turns a list
//!   endpoint into a [`PagedIterator`](crate::pagination::PagedIterator)

mod backend;
mod list;
mod params;

pub use backend::{
    Backend, HttpBackend, HttpBackendConfig, HttpBackendConfigBuilder, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
pub use list::{list_iter, Direction, Identified, List};
pub use params::{escape_path_segment, push_list, push_map, push_opt, FormParams, ListParams};

#[cfg(test)]
pub(crate) mod mock;
