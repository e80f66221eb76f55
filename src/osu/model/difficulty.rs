//! `[Difficulty]` section model.

/// Difficulty settings in `[Difficulty]`.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// `HPDrainRate`.
    pub hp_drain_rate: Option<f64>,
    /// `CircleSize`. The key count in osu!mania.
    pub circle_size: Option<f64>,
    /// `OverallDifficulty`.
    pub overall_difficulty: Option<f64>,
    /// `ApproachRate`.
    pub approach_rate: Option<f64>,
    /// `SliderMultiplier`, hundreds of osu!pixels per beat.
    pub slider_multiplier: Option<f64>,
    /// `SliderTickRate`, ticks per beat.
    pub slider_tick_rate: Option<f64>,
}
