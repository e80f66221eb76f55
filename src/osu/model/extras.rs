//! Hit sample extras.

use crate::osu::command::SampleSet;

/// Sample parameters attached to a hit object, `sampleSet:additionSet:index:volume:filename`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extras {
    /// Sample set of the normal sound. `Auto` inherits from the timing point.
    pub sample_set: SampleSet,
    /// Sample set of the whistle, finish and clap sounds.
    pub addition_set: SampleSet,
    /// Custom sample index. `0` inherits from the timing point.
    pub custom_index: u32,
    /// Volume in percent. `0` inherits from the timing point.
    pub volume: u32,
    /// A sample file played instead of the sample set. Empty when unused.
    pub filename: String,
}
