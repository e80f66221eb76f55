//! Decoders of the comma separated records.
//!
//! Every record type implements [`FromStr`], so a single line can be decoded without the
//! document around it:
//!
//! ```
//! use osu_rs::osu::prelude::*;
//!
//! let point: TimingPoint = "10171,-100,4,2,0,60,0,1".parse().unwrap();
//! assert!(!point.inherited);
//! assert!(point.kiai);
//! ```

use std::str::FromStr;

use crate::osu::{
    command::{
        HitObjectKind, HitSound, SampleSet,
        graphics::{CurvePoint, CurveType, Rgb},
    },
    field::{
        FieldError, Fields, Result, parse_float, parse_int, parse_flag, parse_list, split_once_at,
    },
    model::{
        Background, Break, Circle, EdgeSet, Extras, HitObject, HitObjectBase, HoldNote, Slider,
        SliderPath, SliderTail, Spinner, TimingPoint,
    },
};

/// The leading fields of a break event.
pub const BREAK_PREFIX: &str = "2,";

/// The leading fields of a background event.
pub const BACKGROUND_PREFIX: &str = "0,0,";

fn parse_sample_set(text: &str) -> Result<SampleSet> {
    SampleSet::try_from(parse_int::<u8>(text)?)
}

fn parse_hit_sound(text: &str) -> Result<HitSound> {
    parse_int(text).map(HitSound::from_bits_retain)
}

impl FromStr for Break {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix(BREAK_PREFIX)
            .ok_or_else(|| FieldError::MissingField {
                index: 0,
                record: s.to_string(),
            })?;
        let fields = Fields::new(rest);
        Ok(Self {
            start: fields.int(0)?,
            end: fields.int(1)?,
        })
    }
}

impl FromStr for Background {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix(BACKGROUND_PREFIX)
            .ok_or_else(|| FieldError::MissingField {
                index: 0,
                record: s.to_string(),
            })?;
        // A quoted filename may contain commas.
        let (filename, offsets) = match rest.strip_prefix('"') {
            Some(quoted) => {
                let (filename, after) = split_once_at(quoted, '"')?;
                (filename, after.strip_prefix(',').unwrap_or(after))
            }
            None => rest.split_once(',').unwrap_or((rest, "")),
        };
        let offsets = Fields::new(offsets);
        let offset = |index: usize| match offsets.get(index) {
            Some(text) if !text.is_empty() => parse_int(text),
            _ => Ok(0),
        };
        Ok(Self {
            filename: filename.to_string(),
            x: offset(0)?,
            y: offset(1)?,
        })
    }
}

impl FromStr for Rgb {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let fields = Fields::new(s);
        Ok((fields.int(0)?, fields.int(1)?, fields.int(2)?).into())
    }
}

impl FromStr for Extras {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(5, ':');
        let mut extras = Self {
            sample_set: parse_sample_set(parts.next().unwrap_or_default())?,
            ..Self::default()
        };
        if let Some(addition_set) = parts.next() {
            extras.addition_set = parse_sample_set(addition_set)?;
        }
        if let Some(custom_index) = parts.next() {
            extras.custom_index = parse_int(custom_index)?;
        }
        if let Some(volume) = parts.next() {
            extras.volume = parse_int(volume)?;
        }
        if let Some(filename) = parts.next() {
            extras.filename = filename.to_string();
        }
        Ok(extras)
    }
}

impl FromStr for TimingPoint {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let fields = Fields::new(s);
        let beat_length = fields.float(1)?;
        // Field 6 marks whether the point is uninherited, which the sign of the beat length
        // already tells.
        let kiai = fields.get(7).map(parse_flag).transpose()?.unwrap_or(false);
        Ok(Self {
            offset: fields.int(0)?,
            beat_length,
            meter: fields.int(2)?,
            sample_set: parse_sample_set(fields.require(3)?)?,
            sample_index: fields.int(4)?,
            volume: fields.int(5)?,
            inherited: beat_length > 0.0,
            kiai,
        })
    }
}

impl FromStr for CurvePoint {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = split_once_at(s, ':')?;
        Ok((parse_int(x)?, parse_int(y)?).into())
    }
}

impl FromStr for SliderPath {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split('|');
        let curve_type: CurveType = tokens.next().unwrap_or_default().parse()?;
        let points = tokens.map(str::parse).collect::<Result<_>>()?;
        Ok(Self { curve_type, points })
    }
}

impl FromStr for EdgeSet {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let (sample_set, addition_set) = split_once_at(s, ':')?;
        Ok(Self {
            sample_set: parse_sample_set(sample_set)?,
            addition_set: parse_sample_set(addition_set)?,
        })
    }
}

fn parse_base(fields: &Fields<'_>) -> Result<HitObjectBase> {
    Ok(HitObjectBase {
        x: fields.int(0)?,
        y: fields.int(1)?,
        time: fields.int(2)?,
        kind: HitObjectKind::from_bits_retain(fields.int(3)?),
        hit_sound: parse_hit_sound(fields.require(4)?)?,
    })
}

fn parse_circle(s: &str) -> Result<Circle> {
    let fields = Fields::with_limit(s, 6);
    Ok(Circle {
        base: parse_base(&fields)?,
        extras: fields.get(5).map(str::parse).transpose()?,
    })
}

fn parse_slider(s: &str) -> Result<Slider> {
    let fields = Fields::with_limit(s, 11);
    Ok(Slider {
        base: parse_base(&fields)?,
        path: fields.require(5)?.parse()?,
        repeat: fields.int(6)?,
        tail: fields
            .get(7)
            .map(|length| parse_slider_tail(length, &fields))
            .transpose()?,
    })
}

/// Decodes the fields from the length on. Each absent field ends the record.
fn parse_slider_tail(length: &str, fields: &Fields<'_>) -> Result<SliderTail> {
    Ok(SliderTail {
        length: parse_float(length)?,
        edge_sounds: fields
            .get(8)
            .map(|sounds| parse_list(sounds, '|', parse_hit_sound))
            .transpose()?
            .unwrap_or_default(),
        edge_sets: fields
            .get(9)
            .map(|sets| parse_list(sets, '|', str::parse))
            .transpose()?
            .unwrap_or_default(),
        extras: fields.get(10).map(str::parse).transpose()?,
    })
}

fn parse_spinner(s: &str) -> Result<Spinner> {
    let fields = Fields::with_limit(s, 7);
    Ok(Spinner {
        base: parse_base(&fields)?,
        end_time: fields.int(5)?,
        extras: fields.get(6).map(str::parse).transpose()?,
    })
}

fn parse_hold_note(s: &str) -> Result<HoldNote> {
    let fields = Fields::with_limit(s, 6);
    let base = parse_base(&fields)?;
    let (end_time, extras) = split_once_at(fields.require(5)?, ':')?;
    Ok(HoldNote {
        base,
        end_time: parse_int(end_time)?,
        extras: extras.parse()?,
    })
}

impl FromStr for HitObject {
    type Err = FieldError;

    /// Decodes a hit object, choosing the shape by the type bits in field 3.
    ///
    /// The bits are tested in the order circle, slider, spinner, hold note. The circle test
    /// compares the masked value with `1`, the other tests check the masked value for non-zero.
    fn from_str(s: &str) -> Result<Self> {
        let kind = HitObjectKind::from_bits_retain(Fields::with_limit(s, 5).int(3)?);
        if (kind & HitObjectKind::CIRCLE).bits() == 1 {
            parse_circle(s).map(Self::Circle)
        } else if (kind & HitObjectKind::SLIDER).bits() > 0 {
            parse_slider(s).map(Self::Slider)
        } else if (kind & HitObjectKind::SPINNER).bits() > 0 {
            parse_spinner(s).map(Self::Spinner)
        } else if (kind & HitObjectKind::HOLD_NOTE).bits() > 0 {
            parse_hold_note(s).map(Self::HoldNote)
        } else {
            Err(FieldError::UnknownHitObjectKind(kind.bits()))
        }
    }
}
