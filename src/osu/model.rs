//! Definitions of the beatmap model built by [`parse`](super::parse).

pub mod colours;
pub mod difficulty;
pub mod editor;
pub mod events;
pub mod extras;
pub mod general;
pub mod hit_object;
pub mod metadata;
pub mod timing;

pub use self::{
    colours::Colours,
    difficulty::Difficulty,
    editor::Editor,
    events::{Background, Break, Events},
    extras::Extras,
    general::General,
    hit_object::{
        Circle, EdgeSet, HitObject, HitObjectBase, HoldNote, Slider, SliderPath, SliderTail,
        Spinner,
    },
    metadata::Metadata,
    timing::TimingPoint,
};

/// A whole `.osu` document.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The format version from `osu file format v<N>`, if declared.
    pub version: Option<u32>,
    /// `[General]` section.
    pub general: General,
    /// `[Editor]` section.
    pub editor: Editor,
    /// `[Metadata]` section.
    pub metadata: Metadata,
    /// `[Difficulty]` section.
    pub difficulty: Difficulty,
    /// `[Events]` section, except storyboard commands.
    pub events: Events,
    /// `[TimingPoints]` section, in source order.
    pub timing_points: Vec<TimingPoint>,
    /// `[Colours]` section.
    pub colours: Colours,
    /// `[HitObjects]` section, in source order.
    pub hit_objects: Vec<HitObject>,
}
