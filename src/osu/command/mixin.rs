//! Mixin types for structures.
//!
//! - `SourceRangeMixin` is a generic wrapper that attaches a source line and its byte span to a value.
//! - `SourceRangeMixinExt` provides extension methods to create `SourceRangeMixin` instances more conveniently.

use std::ops::Range;

/// A generic wrapper that attaches position information (line number and index span) to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRangeMixin<T> {
    /// Wrapped content value
    content: T,
    /// The line number, starts with 1.
    line: usize,
    /// Byte span in the source string (0-based, end exclusive)
    range: Range<usize>,
}

impl<T> SourceRangeMixin<T> {
    /// Instances a new `SourceRangeMixin`
    pub const fn new(content: T, line: usize, range: Range<usize>) -> Self {
        Self {
            content,
            line,
            range,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the line number, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte span of the source.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the source span as a tuple of (start, end).
    pub const fn as_span(&self) -> (usize, usize) {
        (self.range.start, self.range.end)
    }

    /// Maps the content of the wrapper.
    pub fn map<U, F>(self, f: F) -> SourceRangeMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        SourceRangeMixin::new(f(self.content), self.line, self.range)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceRangeMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.content, self.line)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceRangeMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for `SourceRangeMixin`.
pub trait SourceRangeMixinExt {
    /// Instances a new `SourceRangeMixin` with the same position as a wrapper.
    fn into_wrapper<W>(self, wrapper: &SourceRangeMixin<W>) -> SourceRangeMixin<Self>
    where
        Self: Sized,
    {
        SourceRangeMixin::new(self, wrapper.line, wrapper.range())
    }

    /// Instances a new `SourceRangeMixin` with a given line and span.
    fn into_wrapper_range(self, line: usize, range: Range<usize>) -> SourceRangeMixin<Self>
    where
        Self: Sized,
    {
        SourceRangeMixin::new(self, line, range)
    }
}

impl<T> SourceRangeMixinExt for T {}
