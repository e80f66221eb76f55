//! Line classifier of the `.osu` format.
//!
//! Raw [String] == [`parse_lines`] ==> [`LineWithRange`] list == [parse](super::parse) ==>
//! [`Beatmap`](super::model::Beatmap)
//!
//! Blank lines, lines shorter than 3 characters and `//` comments are dropped here. The first
//! `osu file format v<N>` line becomes [`Line::Version`], and `[Name]` lines become
//! [`Line::Section`]. Everything else is passed on as [`Line::Content`].

pub mod cursor;

use thiserror::Error;

use crate::osu::command::mixin::{SourceRangeMixin, SourceRangeMixinExt};

use self::cursor::{Cursor, RawLine};

/// The prefix of the format version header.
pub const VERSION_PREFIX: &str = "osu file format v";

/// The prefix of comment lines.
pub const COMMENT_PREFIX: &str = "//";

/// An error occurred when classifying lines.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexError {
    /// A line opened a section header without closing it.
    #[error("malformed section header `{0}`")]
    MalformedSectionHeader(String),
    /// The section name was not recognized.
    #[error("unknown section `[{0}]`")]
    UnknownSection(String),
    /// The version header did not end with an integer.
    #[error("invalid format version `{0}`")]
    InvalidVersion(String),
}

/// A lex error with position information.
pub type LexErrorWithRange = SourceRangeMixin<LexError>;

/// Type alias of `core::result::Result<T, LexErrorWithRange>`
pub(crate) type Result<T> = core::result::Result<T, LexErrorWithRange>;

#[cfg(feature = "diagnostics")]
impl crate::diagnostics::ToAriadne for LexErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &crate::diagnostics::SimpleSource<'a>,
    ) -> ariadne::Report<'a, (String, std::ops::Range<usize>)> {
        crate::diagnostics::build_report(
            src,
            self.range(),
            &format!("lex: {}", self.content()),
            "in this line",
        )
    }
}

/// The sections of a `.osu` document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
    /// `[Colours]`
    Colours,
    /// `[HitObjects]`
    HitObjects,
}

impl Section {
    /// Returns the name written between the brackets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Editor => "Editor",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::Events => "Events",
            Self::TimingPoints => "TimingPoints",
            Self::Colours => "Colours",
            Self::HitObjects => "HitObjects",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = LexError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(match s {
            "General" => Self::General,
            "Editor" => Self::Editor,
            "Metadata" => Self::Metadata,
            "Difficulty" => Self::Difficulty,
            "Events" => Self::Events,
            "TimingPoints" => Self::TimingPoints,
            "Colours" => Self::Colours,
            "HitObjects" => Self::HitObjects,
            _ => return Err(LexError::UnknownSection(s.to_string())),
        })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name())
    }
}

/// A significant line of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line<'a> {
    /// `osu file format v<N>`
    Version(u32),
    /// `[Name]`
    Section(Section),
    /// Any other line, trimmed.
    Content(&'a str),
}

/// A line with position information.
pub type LineWithRange<'a> = SourceRangeMixin<Line<'a>>;

/// Classifies the lines of the source text.
///
/// # Errors
///
/// Returns the first malformed or unknown section header, or a version header without an
/// integer.
pub fn parse_lines(source: &str) -> Result<Vec<LineWithRange<'_>>> {
    let mut has_version = false;
    let mut lines = vec![];
    for raw in Cursor::new(source) {
        let RawLine { line, range, text } = raw;
        let (text, range) = match text.strip_prefix('\u{feff}') {
            Some(rest) => {
                let rest = rest.trim_start();
                (rest, range.end - rest.len()..range.end)
            }
            None => (text, range),
        };
        if text.chars().nth(2).is_none() || text.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let classified = if let Some(version) = text.strip_prefix(VERSION_PREFIX) {
            if has_version {
                continue;
            }
            has_version = true;
            let version = version
                .trim()
                .parse()
                .map_err(|_| LexError::InvalidVersion(text.to_string()))
                .map_err(|err| err.into_wrapper_range(line, range.clone()))?;
            Line::Version(version)
        } else if let Some(header) = text.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or_else(|| {
                LexError::MalformedSectionHeader(text.to_string())
                    .into_wrapper_range(line, range.clone())
            })?;
            let section = name
                .parse()
                .map_err(|err: LexError| err.into_wrapper_range(line, range.clone()))?;
            Line::Section(section)
        } else {
            Line::Content(text)
        };
        lines.push(classified.into_wrapper_range(line, range));
    }
    Ok(lines)
}
