//! Fancy diagnostics support using `ariadne`.
//!
//! Errors carrying [`SourceRangeMixin`](crate::osu::command::mixin::SourceRangeMixin) know the
//! byte range of the offending line, so ariadne can compute rows and columns by itself.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_rs::{diagnostics::emit_osu_error, osu::parse_osu};
//!
//! let source = "[Difficulty]\nCircleSize:big\n";
//! if let Err(error) = parse_osu(source) {
//!     emit_osu_error("broken.osu", source, &error);
//! }
//! ```

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::osu::OsuError;

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source_text = "[Metadata]\nTitle:Test\n";
/// let source = SimpleSource::new("test.osu", source_text);
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.osu");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

/// Helper to build a styled error `Report` with one label.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(ReportKind::Error, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(Color::Red),
        )
        .finish()
}

impl ToAriadne for OsuError {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            Self::Lex(error) => error.to_report(src),
            Self::Parse(error) => error.to_report(src),
            // No position to point at.
            Self::Io(error) => build_report(src, 0..0, "io", error),
        }
    }
}

/// Prints a report of `error` to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete `.osu` source text
/// * `error` - The error returned by parsing `source`
pub fn emit_osu_error(name: &str, source: &str, error: &OsuError) {
    let simple = SimpleSource::new(name, source);
    let _ = error
        .to_report(&simple)
        .eprint((name.to_string(), Source::from(source)));
}
