//! Writers of the comma separated records, the inverse of [`crate::osu::parse::record`].

use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

use crate::osu::{
    command::{
        HitSound,
        graphics::{CurvePoint, Rgb},
    },
    field::flag_str,
    model::{
        Background, Break, Circle, EdgeSet, Extras, HitObject, HitObjectBase, HoldNote, Slider,
        SliderPath, SliderTail, Spinner, TimingPoint,
    },
    parse::record::{BACKGROUND_PREFIX, BREAK_PREFIX},
};

impl Display for Break {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{BREAK_PREFIX}{},{}", self.start, self.end)
    }
}

impl Display for Background {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{BACKGROUND_PREFIX}\"{}\",{},{}",
            self.filename, self.x, self.y
        )
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl Display for Extras {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.sample_set, self.addition_set, self.custom_index, self.volume, self.filename
        )
    }
}

impl Display for TimingPoint {
    /// Writes the timing point. The uninherited marker and the number format of the beat length
    /// follow the sign of the beat length, regardless of [`TimingPoint::inherited`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let inherited = self.beat_length > 0.0;
        write!(f, "{},", self.offset)?;
        if inherited {
            write!(f, "{}", self.beat_length)?;
        } else {
            write!(f, "{}", self.beat_length as i64)?;
        }
        write!(
            f,
            ",{},{},{},{},{},{}",
            self.meter,
            self.sample_set,
            self.sample_index,
            self.volume,
            flag_str(inherited),
            flag_str(self.kiai)
        )
    }
}

impl Display for CurvePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl Display for SliderPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.curve_type)?;
        for point in &self.points {
            write!(f, "|{point}")?;
        }
        Ok(())
    }
}

impl Display for EdgeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.sample_set, self.addition_set)
    }
}

impl Display for HitObjectBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.x,
            self.y,
            self.time,
            self.kind.bits(),
            self.hit_sound.bits()
        )
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.base)?;
        if let Some(extras) = &self.extras {
            write!(f, ",{extras}")?;
        }
        Ok(())
    }
}

impl Display for Slider {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{},{},{}", self.base, self.path, self.repeat)?;
        if let Some(tail) = &self.tail {
            write!(f, ",{tail}")?;
        }
        Ok(())
    }
}

impl Display for SliderTail {
    /// Writes the tail up to its last present field.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.length)?;
        let depth = if self.extras.is_some() {
            3
        } else if !self.edge_sets.is_empty() {
            2
        } else {
            usize::from(!self.edge_sounds.is_empty())
        };
        if depth >= 1 {
            let sounds = self.edge_sounds.iter().map(HitSound::bits).join("|");
            write!(f, ",{sounds}")?;
        }
        if depth >= 2 {
            write!(f, ",{}", self.edge_sets.iter().join("|"))?;
        }
        if let Some(extras) = &self.extras {
            write!(f, ",{extras}")?;
        }
        Ok(())
    }
}

impl Display for Spinner {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{},{}", self.base, self.end_time)?;
        if let Some(extras) = &self.extras {
            write!(f, ",{extras}")?;
        }
        Ok(())
    }
}

impl Display for HoldNote {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{},{}:{}", self.base, self.end_time, self.extras)
    }
}

impl Display for HitObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Circle(circle) => Display::fmt(circle, f),
            Self::Slider(slider) => Display::fmt(slider, f),
            Self::Spinner(spinner) => Display::fmt(spinner, f),
            Self::HoldNote(hold) => Display::fmt(hold, f),
        }
    }
}
