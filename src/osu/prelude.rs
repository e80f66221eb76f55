//! Prelude module for the osu! beatmap codec.
//!
//! You can use `use osu_rs::osu::prelude::*;` to import all beatmap types at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_osu_error};

pub use super::{
    OsuError,
    command::{
        Countdown, GameMode, HitObjectKind, HitSound, SampleSet,
        graphics::{CurvePoint, CurveType, Rgb},
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
    },
    field::FieldError,
    lex::{LexError, LexErrorWithRange, Line, LineWithRange, Section, parse_lines},
    model::{
        Background, Beatmap, Break, Circle, Colours, Difficulty, EdgeSet, Editor, Events, Extras,
        General, HitObject, HitObjectBase, HoldNote, Metadata, Slider, SliderPath, SliderTail,
        Spinner, TimingPoint,
    },
    parse::{
        ParseError, ParseErrorWithRange,
        section_processor::{SectionProcessor, processor_for},
    },
    parse_osu,
};
