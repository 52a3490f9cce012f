//! Catalog fetch lifecycle
//!
//! Tracks one logical request at a time. Every request gets a fresh
//! [`FetchTicket`]; a completion is applied only if its ticket is still the
//! latest, so a slow response for an old query can never overwrite the
//! result of a newer one.

use crate::error::Result;
use pulse_core::Catalog;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Message shown for every kind of fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load songs";

/// Observable state of the catalog fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CatalogState {
    /// No request issued yet
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded
    Ready { catalog: Catalog },
    /// The latest request failed
    Failed { message: String },
}

impl CatalogState {
    /// Catalog of a successful fetch
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready { catalog } => Some(catalog),
            _ => None,
        }
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Handle for one issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: String,
}

impl FetchTicket {
    /// Query this request was issued for
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Outcome of feeding a completion into the fetcher
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Completion applied; the catalog was replaced
    Loaded(Catalog),
    /// Completion applied; the request failed
    Failed,
    /// Completion belonged to a superseded request or arrived after disposal
    Discarded,
}

/// Catalog fetch state machine
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    state: CatalogState,
    generation: u64,
    in_flight: Option<u64>,
    last_query: Option<String>,
    disposed: bool,
}

impl CatalogFetcher {
    /// Create an idle fetcher
    pub fn new() -> Self {
        Self {
            state: CatalogState::Idle,
            generation: 0,
            in_flight: None,
            last_query: None,
            disposed: false,
        }
    }

    /// Start a request for `query`
    ///
    /// Returns `None` (and leaves state untouched) for a blank query or after
    /// disposal. Otherwise the fetcher enters `Loading` and any in-flight
    /// request is superseded.
    pub fn request(&mut self, query: &str) -> Option<FetchTicket> {
        let query = query.trim();
        if query.is_empty() || self.disposed {
            return None;
        }

        if let Some(previous) = self.in_flight {
            debug!(superseded = previous, "Superseding in-flight catalog request");
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.last_query = Some(query.to_string());
        self.state = CatalogState::Loading;

        info!(query = %query, request = self.generation, "Fetching catalog");

        Some(FetchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Re-issue the most recent query
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let query = self.last_query.clone()?;
        self.request(&query)
    }

    /// Apply the result of the request identified by `ticket`
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<Catalog>) -> FetchOutcome {
        if self.disposed || self.in_flight != Some(ticket.generation) {
            debug!(
                request = ticket.generation,
                query = %ticket.query,
                "Discarding stale catalog response"
            );
            return FetchOutcome::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(catalog) => {
                info!(query = %ticket.query, tracks = catalog.len(), "Catalog loaded");
                self.state = CatalogState::Ready {
                    catalog: catalog.clone(),
                };
                FetchOutcome::Loaded(catalog)
            }
            Err(e) => {
                warn!(
                    query = %ticket.query,
                    error = %e,
                    transient = e.is_transient(),
                    "Catalog fetch failed"
                );
                self.state = CatalogState::Failed {
                    message: FETCH_ERROR_MESSAGE.to_string(),
                };
                FetchOutcome::Failed
            }
        }
    }

    /// Stop applying results; later completions are discarded
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = None;
    }

    /// Current state
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Most recently requested query
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }
}

impl Default for CatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}
