//! Catalog source abstraction
//!
//! The player only needs "query in, catalog out". [`SearchClient`] is the
//! production implementation; tests and offline shells provide their own.
//!
//! [`SearchClient`]: crate::SearchClient

use crate::error::Result;
use async_trait::async_trait;
use pulse_core::Catalog;

/// Anything that can turn a query into a catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog for `query`
    async fn search(&self, query: &str) -> Result<Catalog>;
}
