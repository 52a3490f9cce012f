//! Pulse Player Search
//!
//! Turns keystrokes into catalogs.
//!
//! # Features
//!
//! - **Debouncing**: [`SearchDebouncer`] settles raw input into an effective query
//! - **Fetch lifecycle**: [`CatalogFetcher`] tracks loading / ready / failed and
//!   discards superseded responses
//! - **HTTP client**: [`SearchClient`] queries the remote track search service
//!
//! # Example
//!
//! ```ignore
//! use pulse_search::{CatalogFetcher, FetchOutcome, SearchClient, SearchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SearchClient::new(SearchConfig::default().with_api_key("key"))?;
//!     let mut fetcher = CatalogFetcher::new();
//!
//!     if let Some(ticket) = fetcher.request("arijit") {
//!         let result = client.search(ticket.query()).await;
//!         if let FetchOutcome::Loaded(catalog) = fetcher.complete(&ticket, result) {
//!             println!("Found {} tracks", catalog.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod debounce;
mod error;
mod fetcher;
mod source;
mod types;

// Re-export main types
pub use client::SearchClient;
pub use debounce::{DebounceTicket, SearchDebouncer, DEFAULT_DEBOUNCE};
pub use error::{Result, SearchError};
pub use fetcher::{CatalogFetcher, CatalogState, FetchOutcome, FetchTicket, FETCH_ERROR_MESSAGE};
pub use source::CatalogSource;
pub use types::{
    ApiAlbum, ApiArtist, ApiTrack, SearchConfig, SearchResponse, DEFAULT_API_HOST,
    DEFAULT_BASE_URL,
};
