//! `[TimingPoints]` records.

use crate::osu::command::SampleSet;

/// A timing point, `offset,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,kiai`.
///
/// A positive beat length defines the tempo, and later points can inherit from it. A negative one
/// scales the slider velocity of the preceding tempo point by `-100 / beatLength`.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Start time in milliseconds.
    pub offset: i32,
    /// Duration of a beat in milliseconds, or a negative velocity multiplier.
    pub beat_length: f64,
    /// Beats in a measure.
    pub meter: u32,
    /// Default sample set of hit objects.
    pub sample_set: SampleSet,
    /// Default custom sample index.
    pub sample_index: u32,
    /// Default volume in percent.
    pub volume: u32,
    /// Whether later points can inherit from this one. Always equals `beat_length > 0` after
    /// parsing. Writing derives the marker from `beat_length`, not from this field.
    pub inherited: bool,
    /// Whether kiai time is active.
    pub kiai: bool,
}

impl TimingPoint {
    /// Returns the tempo in beats per minute if this point defines one.
    #[must_use]
    pub fn bpm(&self) -> Option<f64> {
        (self.beat_length > 0.0).then(|| 60_000.0 / self.beat_length)
    }

    /// Returns the slider velocity multiplier. It is `1` for tempo defining points.
    #[must_use]
    pub fn velocity_multiplier(&self) -> f64 {
        if self.beat_length < 0.0 {
            -100.0 / self.beat_length
        } else {
            1.0
        }
    }
}
