//! Definitions of field value data.
//!
//! Structures in this module are shared by the [`lex`](super::lex) and [`parse`](super::parse)
//! parts and by the output models.

pub mod graphics;
pub mod mixin;

use crate::osu::field::FieldError;

/// Which set of hit sounds will be used.
///
/// Written by name in `[General]` and by number in timing points and hit object extras.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// Inherits the sample set from the timing point, or uses `Normal` at the top level.
    #[default]
    Auto,
    /// The normal sample set.
    Normal,
    /// The soft sample set.
    Soft,
    /// The drum sample set.
    Drum,
}

impl SampleSet {
    /// Returns the name used in the `[General]` section.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Normal => "Normal",
            Self::Soft => "Soft",
            Self::Drum => "Drum",
        }
    }

    /// Parses the name used in the `[General]` section.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidSampleSet`] on an unknown name.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        Ok(match name {
            "Auto" => Self::Auto,
            "Normal" => Self::Normal,
            "Soft" => Self::Soft,
            "Drum" => Self::Drum,
            _ => return Err(FieldError::InvalidSampleSet(name.to_string())),
        })
    }
}

impl TryFrom<u8> for SampleSet {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Auto,
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            other => return Err(FieldError::InvalidSampleSet(other.to_string())),
        })
    }
}

impl From<SampleSet> for u8 {
    fn from(value: SampleSet) -> Self {
        value as u8
    }
}

impl std::fmt::Display for SampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// The speed of the countdown before the first hit object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Countdown {
    /// No countdown.
    None,
    /// Normal speed.
    #[default]
    Normal,
    /// Half speed.
    Half,
    /// Double speed.
    Double,
}

impl TryFrom<u8> for Countdown {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Normal,
            2 => Self::Half,
            3 => Self::Double,
            other => return Err(FieldError::InvalidCountdown(other.to_string())),
        })
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// The game mode of the beatmap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// osu!standard.
    #[default]
    Osu,
    /// osu!taiko.
    Taiko,
    /// osu!catch.
    Catch,
    /// osu!mania.
    Mania,
}

impl TryFrom<u8> for GameMode {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Osu,
            1 => Self::Taiko,
            2 => Self::Catch,
            3 => Self::Mania,
            other => return Err(FieldError::InvalidGameMode(other.to_string())),
        })
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

bitflags::bitflags! {
    /// Hit sounds played when the object is hit. Zero plays the normal sound only.
    ///
    /// Unknown bits are kept as is, so writing back the value never loses information.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HitSound: u8 {
        /// Normal sound.
        const NORMAL = 1;
        /// Whistle sound.
        const WHISTLE = 1 << 1;
        /// Finish sound.
        const FINISH = 1 << 2;
        /// Clap sound.
        const CLAP = 1 << 3;
    }
}

bitflags::bitflags! {
    /// The type bits of a hit object. They decide both its shape and its combo behavior.
    ///
    /// Unknown bits are kept as is.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HitObjectKind: u8 {
        /// A hit circle.
        const CIRCLE = 1;
        /// A slider.
        const SLIDER = 1 << 1;
        /// Starts a new combo.
        const NEW_COMBO = 1 << 2;
        /// A spinner.
        const SPINNER = 1 << 3;
        /// Combo colour skip, lowest bit.
        const COMBO_SKIP_1 = 1 << 4;
        /// Combo colour skip, middle bit.
        const COMBO_SKIP_2 = 1 << 5;
        /// Combo colour skip, highest bit.
        const COMBO_SKIP_3 = 1 << 6;
        /// An osu!mania hold note.
        const HOLD_NOTE = 1 << 7;
    }
}

impl HitObjectKind {
    /// Returns how many combo colours are skipped at a new combo.
    #[must_use]
    pub const fn combo_skip(self) -> u8 {
        (self.bits() >> 4) & 0b111
    }
}
