//! `[Editor]` section model.

/// Saved editor settings in `[Editor]`.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// `Bookmarks`, in milliseconds.
    pub bookmarks: Option<Vec<i32>>,
    /// `DistanceSpacing`.
    pub distance_spacing: Option<f64>,
    /// `BeatDivisor`.
    pub beat_divisor: Option<u32>,
    /// `GridSize`.
    pub grid_size: Option<u32>,
    /// `TimelineZoom`.
    pub timeline_zoom: Option<f64>,
}
