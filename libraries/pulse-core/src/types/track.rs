/// Track domain type
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier as assigned by the search service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A playable search result
///
/// Immutable once fetched; owned by the [`Catalog`](crate::Catalog) that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Preview audio URL loaded into the audio output
    pub audio_url: String,

    /// Cover art URL
    pub cover_url: String,

    /// Cosmetic background accent, assigned from response position
    pub accent: AccentTheme,
}

/// Background accent gradient cycled across search results
///
/// Purely cosmetic: assigned by position in the response, never used as an
/// identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTheme {
    /// Purple to indigo
    Violet,
    /// Pink to red
    Rose,
    /// Green to emerald
    Emerald,
    /// Blue to cyan
    Ocean,
    /// Orange to yellow
    Sunset,
}

impl AccentTheme {
    /// Palette in cycling order
    pub const PALETTE: [AccentTheme; 5] = [
        Self::Violet,
        Self::Rose,
        Self::Emerald,
        Self::Ocean,
        Self::Sunset,
    ];

    /// Accent for the track at `position` in a search response
    #[must_use]
    pub fn for_position(position: usize) -> Self {
        Self::PALETTE[position % Self::PALETTE.len()]
    }

    /// Gradient utility classes rendered by the view
    #[must_use]
    pub fn css_classes(&self) -> &'static str {
        match self {
            Self::Violet => "from-purple-600 to-indigo-600",
            Self::Rose => "from-pink-500 to-red-500",
            Self::Emerald => "from-green-500 to-emerald-600",
            Self::Ocean => "from-blue-500 to-cyan-500",
            Self::Sunset => "from-orange-500 to-yellow-500",
        }
    }
}
