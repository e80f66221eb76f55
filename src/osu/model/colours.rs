//! `[Colours]` section model.

use crate::osu::command::graphics::Rgb;

/// `[Colours]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colours {
    /// `Combo<N>` colours in declaration order. The number in the key is not kept.
    pub combos: Vec<Rgb>,
    /// `SliderBody`.
    pub slider_body: Option<Rgb>,
    /// `SliderTrackOverride`.
    pub slider_track_override: Option<Rgb>,
    /// `SliderBorder`.
    pub slider_border: Option<Rgb>,
}
