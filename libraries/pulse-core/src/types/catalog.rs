/// Catalog of search results
use super::Track;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ordered result set of the most recent successful search
///
/// Order is the server response order. A catalog is never mutated in place:
/// a new search produces a new catalog, and clones share the same storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tracks: Arc<[Track]>,
}

impl Catalog {
    /// Create a catalog from tracks in response order
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into(),
        }
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the last track (`None` when empty)
    pub fn last_index(&self) -> Option<usize> {
        self.tracks.len().checked_sub(1)
    }

    /// Whether `index` refers to a track in this catalog
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.tracks.len()
    }

    /// All tracks in response order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over tracks in response order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Track>> for Catalog {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
