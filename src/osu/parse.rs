//! Parsing [`Beatmap`] from classified lines.
//!
//! Raw [String] == [lex](super::lex) ==> [`LineWithRange`] list == [parse](self) ==> [`Beatmap`]

pub mod record;
pub mod section_processor;

use thiserror::Error;

use crate::osu::{
    command::mixin::{SourceRangeMixin, SourceRangeMixinExt},
    field::FieldError,
    lex::{Line, LineWithRange, Section},
    model::Beatmap,
};

use self::section_processor::processor_for;
#[cfg(feature = "diagnostics")]
use crate::diagnostics::{SimpleSource, ToAriadne, build_report};
#[cfg(feature = "diagnostics")]
use ariadne::Report;

/// An error occurred when parsing the lines of a section.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// A content line came before any section header.
    #[error("content outside of any section")]
    ContentOutsideSection,
    /// A field of a line could not be converted.
    #[error("{section}: {error}")]
    Field {
        /// The section of the line.
        section: Section,
        /// The conversion error.
        #[source]
        error: FieldError,
    },
}

/// A parse error with position information.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;

/// Type alias of `core::result::Result<T, ParseErrorWithRange>`
pub(crate) type Result<T> = core::result::Result<T, ParseErrorWithRange>;

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let label = match self.content() {
            ParseError::ContentOutsideSection => "add a section header above".to_string(),
            ParseError::Field { error, .. } => error.to_string(),
        };
        build_report(
            src,
            self.range(),
            &format!("parse: {}", self.content()),
            label,
        )
    }
}

impl Beatmap {
    /// Builds a beatmap from classified lines.
    ///
    /// Each content line is handed to the processor of the section declared last. Parsing stops
    /// at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first content line outside of any section or with a malformed field.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a LineWithRange<'a>>) -> Result<Self> {
        let mut beatmap = Self::default();
        let mut current: Option<Section> = None;
        for line in lines {
            match *line.content() {
                Line::Version(version) => beatmap.version = Some(version),
                Line::Section(section) => current = Some(section),
                Line::Content(text) => {
                    let section = current
                        .ok_or_else(|| ParseError::ContentOutsideSection.into_wrapper(line))?;
                    processor_for(section)
                        .on_line(text, &mut beatmap)
                        .map_err(|error| ParseError::Field { section, error }.into_wrapper(line))?;
                }
            }
        }
        Ok(beatmap)
    }
}
