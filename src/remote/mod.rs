//! Remote collection client.
//!
//! The store talks to records through [`CollectionClient`]; the HTTP client
//! and the in-memory collection are the two implementations.

mod client;
mod error;
mod http;
mod memory;

use std::sync::Arc;

pub use client::CollectionClient;
pub use error::TransportError;
pub use http::HttpCollectionClient;
pub use memory::{IdStrategy, MemoryCollection, SortKey, SortOrder};

use crate::config::{RemoteConfig, RemoteMode};
use crate::feedback::sample_records;

/// Build the client selected by `config.mode`.
///
/// The local variant starts from the sample reviews and assigns UUIDs.
pub fn connect(config: &RemoteConfig) -> Result<Arc<dyn CollectionClient>, TransportError> {
    match config.mode {
        RemoteMode::Http => {
            tracing::debug!(base_url = %config.base_url, "Using HTTP collection");
            Ok(Arc::new(HttpCollectionClient::new(config)?))
        }
        RemoteMode::Local => {
            tracing::debug!("Using in-memory collection");
            Ok(Arc::new(MemoryCollection::with_records(
                IdStrategy::Random,
                sample_records(),
            )))
        }
    }
}
