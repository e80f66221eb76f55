//! Hit objects of `[HitObjects]`.
//!
//! Every record starts with `x,y,time,type,hitSound`. The `type` bits decide which of the shapes
//! below the rest of the record has:
//!
//! - Circle: `x,y,time,type,hitSound,extras`
//! - Slider: `x,y,time,type,hitSound,curve|points,repeat,length,edgeSounds,edgeSets,extras`
//! - Spinner: `x,y,time,type,hitSound,endTime,extras`
//! - Hold note: `x,y,time,type,hitSound,endTime:extras`

use crate::osu::{
    command::{
        HitObjectKind, HitSound, SampleSet,
        graphics::{CurvePoint, CurveType},
    },
    model::Extras,
};

/// Fields common to every hit object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObjectBase {
    /// X position in osu!pixels.
    pub x: i32,
    /// Y position in osu!pixels.
    pub y: i32,
    /// Hit time in milliseconds.
    pub time: i32,
    /// The type bits, written back as is.
    pub kind: HitObjectKind,
    /// Hit sounds played on hit.
    pub hit_sound: HitSound,
}

/// A hit object, one of the shapes selected by its type bits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObject {
    /// A single hit.
    Circle(Circle),
    /// A hit following a path.
    Slider(Slider),
    /// A hit lasting until the end time, without a path.
    Spinner(Spinner),
    /// An osu!mania note held until the end time.
    HoldNote(HoldNote),
}

impl HitObject {
    /// Returns the common fields.
    #[must_use]
    pub const fn base(&self) -> &HitObjectBase {
        match self {
            Self::Circle(circle) => &circle.base,
            Self::Slider(slider) => &slider.base,
            Self::Spinner(spinner) => &spinner.base,
            Self::HoldNote(hold) => &hold.base,
        }
    }

    /// Returns the common fields mutably.
    pub const fn base_mut(&mut self) -> &mut HitObjectBase {
        match self {
            Self::Circle(circle) => &mut circle.base,
            Self::Slider(slider) => &mut slider.base,
            Self::Spinner(spinner) => &mut spinner.base,
            Self::HoldNote(hold) => &mut hold.base,
        }
    }

    /// Returns the hit sample extras, if written.
    #[must_use]
    pub const fn extras(&self) -> Option<&Extras> {
        match self {
            Self::Circle(Circle { extras, .. }) | Self::Spinner(Spinner { extras, .. }) => {
                extras.as_ref()
            }
            Self::Slider(Slider {
                tail: Some(SliderTail {
                    extras: Some(extras),
                    ..
                }),
                ..
            }) => Some(extras),
            Self::Slider(_) => None,
            Self::HoldNote(hold) => Some(&hold.extras),
        }
    }

    /// Returns the hit time in milliseconds.
    #[must_use]
    pub const fn time(&self) -> i32 {
        self.base().time
    }

    /// Returns the end time for objects with a duration.
    #[must_use]
    pub const fn end_time(&self) -> Option<i32> {
        match self {
            Self::Spinner(spinner) => Some(spinner.end_time),
            Self::HoldNote(hold) => Some(hold.end_time),
            Self::Circle(_) | Self::Slider(_) => None,
        }
    }

    /// Whether this object starts a new combo.
    #[must_use]
    pub const fn is_new_combo(&self) -> bool {
        self.base().kind.contains(HitObjectKind::NEW_COMBO)
    }
}

/// A hit circle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Common fields.
    pub base: HitObjectBase,
    /// Hit sample extras, absent in old beatmaps.
    pub extras: Option<Extras>,
}

/// A slider.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// Common fields.
    pub base: HitObjectBase,
    /// The path followed.
    pub path: SliderPath,
    /// Number of slides. `1` does not repeat.
    pub repeat: u32,
    /// The fields after `repeat`, absent when the record ends there.
    pub tail: Option<SliderTail>,
}

/// The optional fields of a slider record, `length,edgeSounds,edgeSets,extras`.
///
/// The length is required before any later field can be written.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderTail {
    /// Visual length in osu!pixels.
    pub length: f64,
    /// Hit sounds of each edge, `repeat + 1` items by convention. Empty when not written.
    pub edge_sounds: Vec<HitSound>,
    /// Sample sets of each edge, `repeat + 1` items by convention. Empty when not written.
    pub edge_sets: Vec<EdgeSet>,
    /// Hit sample extras.
    pub extras: Option<Extras>,
}

/// The path of a slider, `curveType|x:y|x:y|...`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderPath {
    /// Interpolation between the points.
    pub curve_type: CurveType,
    /// Control points after the head of the slider.
    pub points: Vec<CurvePoint>,
}

/// Sample sets of a slider edge, `sampleSet:additionSet`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    /// Sample set of the normal sound.
    pub sample_set: SampleSet,
    /// Sample set of the additional sounds.
    pub addition_set: SampleSet,
}

/// A spinner.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spinner {
    /// Common fields.
    pub base: HitObjectBase,
    /// End time in milliseconds.
    pub end_time: i32,
    /// Hit sample extras. May be missing entirely.
    pub extras: Option<Extras>,
}

/// An osu!mania hold note. End time and extras share one field, `endTime:extras`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldNote {
    /// Common fields.
    pub base: HitObjectBase,
    /// End time in milliseconds.
    pub end_time: i32,
    /// Hit sample extras.
    pub extras: Extras,
}
