//! Defines for graphics.

use crate::osu::field::FieldError;

/// An RGB colour. Channels are not range checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u32,
    /// Green channel.
    pub g: u32,
    /// Blue channel.
    pub b: u32,
}

impl Rgb {
    /// Creates a new colour.
    #[must_use]
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }
}

impl From<(u32, u32, u32)> for Rgb {
    fn from((r, g, b): (u32, u32, u32)) -> Self {
        Self { r, g, b }
    }
}

/// A point of a slider path in osu!pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for CurvePoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The interpolation of a slider path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// `B`, bezier curve.
    #[default]
    Bezier,
    /// `C`, centripetal catmull-rom. Deprecated.
    CatmullRom,
    /// `L`, straight line segments.
    Linear,
    /// `P`, an arc through three points.
    Perfect,
}

impl CurveType {
    /// Returns the single character tag.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Bezier => 'B',
            Self::CatmullRom => 'C',
            Self::Linear => 'L',
            Self::Perfect => 'P',
        }
    }
}

impl std::str::FromStr for CurveType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "B" => Self::Bezier,
            "C" => Self::CatmullRom,
            "L" => Self::Linear,
            "P" => Self::Perfect,
            _ => return Err(FieldError::InvalidCurveType(s.to_string())),
        })
    }
}

impl std::fmt::Display for CurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
