//! The codec of the osu! beatmap format (`.osu`).
//!
//! This module consists of two phases on the way in, and one on the way out:
//!
//! - `lex` classifies the source lines into the version header, section headers and content.
//! - `parse` routes each content line to the processor of its section and builds a [`Beatmap`].
//! - `unparse` writes a [`Beatmap`] back into the same grammar.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `String` to input). A leading BOM is ignored.
//! - Stop at the first malformed line. There is no partial result.
//! - Ignore unknown keys in key:value sections, but reject unknown sections.
//! - Skip storyboard commands in `[Events]`.

use std::path::Path;

use thiserror::Error;

pub mod command;
pub mod field;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod unparse;

use self::{lex::LexErrorWithRange, model::Beatmap, parse::ParseErrorWithRange};

/// An error occurred when reading a beatmap.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OsuError {
    /// The file could not be read.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// A section header or the version header was malformed.
    #[error("lex: {0}")]
    Lex(#[from] LexErrorWithRange),
    /// A content line was malformed.
    #[error("parse: {0}")]
    Parse(#[from] ParseErrorWithRange),
}

/// Parse a beatmap from source text.
///
/// # Example
///
/// ```
/// use osu_rs::osu::parse_osu;
///
/// let source = "osu file format v14\n\n[Metadata]\nTitle:Test\n\n[HitObjects]\n256,192,1000,1,0,0:0:0:0:\n";
/// let beatmap = parse_osu(source).unwrap();
/// assert_eq!(beatmap.version, Some(14));
/// assert_eq!(beatmap.metadata.title.as_deref(), Some("Test"));
/// assert_eq!(beatmap.hit_objects.len(), 1);
/// ```
///
/// # Errors
///
/// Returns the first malformed header or content line.
pub fn parse_osu(source: &str) -> Result<Beatmap, OsuError> {
    let lines = lex::parse_lines(source)?;
    Ok(Beatmap::from_lines(&lines)?)
}

impl std::str::FromStr for Beatmap {
    type Err = OsuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_osu(s)
    }
}

impl Beatmap {
    /// Reads and parses a `.osu` file.
    ///
    /// # Errors
    ///
    /// Returns [`OsuError::Io`] if the file cannot be read as UTF-8 text, or the first parse
    /// error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OsuError> {
        let source = std::fs::read_to_string(path)?;
        parse_osu(&source)
    }
}
