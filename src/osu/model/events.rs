//! Events kept from `[Events]`. Storyboard commands are not modeled.

/// `[Events]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Events {
    /// The background image, `0,0,"filename",x,y`.
    pub background: Option<Background>,
    /// Break periods, `2,start,end`.
    pub breaks: Vec<Break>,
}

/// A break period in milliseconds. `start <= end` is not checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Break {
    /// Start time.
    pub start: i32,
    /// End time.
    pub end: i32,
}

/// The background image declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    /// Image path relative to the beatmap folder, without quotes.
    pub filename: String,
    /// Offset from the screen center in osu!pixels.
    pub x: i32,
    /// Offset from the screen center in osu!pixels.
    pub y: i32,
}
