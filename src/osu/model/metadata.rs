//! `[Metadata]` section model.

/// Descriptive information in `[Metadata]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// `Title`, romanised.
    pub title: Option<String>,
    /// `TitleUnicode`.
    pub title_unicode: Option<String>,
    /// `Artist`, romanised.
    pub artist: Option<String>,
    /// `ArtistUnicode`.
    pub artist_unicode: Option<String>,
    /// `Creator`, the mapper.
    pub creator: Option<String>,
    /// `Version`, the difficulty name.
    pub version: Option<String>,
    /// `Source`.
    pub source: Option<String>,
    /// `Tags`.
    pub tags: Option<Vec<String>>,
    /// `BeatmapID`.
    pub beatmap_id: Option<i32>,
    /// `BeatmapSetID`.
    pub beatmap_set_id: Option<i32>,
}
