//! Line cursor over the source text.

use std::ops::Range;

/// A line read by [`Cursor`], with the terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// The line number, starts with 1.
    pub line: usize,
    /// Byte span of `text` in the source.
    pub range: Range<usize>,
    /// The trimmed line content.
    pub text: &'a str,
}

/// Reads the source line by line, tracking line numbers and byte positions.
pub struct Cursor<'a> {
    /// The line number of the next line, starts with 1.
    line: usize,
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            line: 1,
            index: 0,
            source,
        }
    }

    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Determine the end of the current line and handle CRLF (\r\n) correctly.
    ///
    /// Returns a tuple `(next_index, line_end_index)` where:
    /// - `next_index` is the absolute byte index of the next line start,
    /// - `line_end_index` is the absolute byte index where the line content ends (exclusive),
    ///   excluding the `\r` of a CRLF.
    fn current_line_bounds(&self) -> (usize, usize) {
        let rest = &self.source[self.index..];
        match rest.find('\n') {
            Some(lf) => {
                let content_end = if rest[..lf].ends_with('\r') {
                    lf - 1
                } else {
                    lf
                };
                (self.index + lf + 1, self.index + content_end)
            }
            None => (self.source.len(), self.source.len()),
        }
    }

    /// Move cursor through the current line and return it trimmed.
    pub fn next_line(&mut self) -> Option<RawLine<'a>> {
        if self.is_end() {
            return None;
        }
        let (next_index, line_end) = self.current_line_bounds();
        let untrimmed = &self.source[self.index..line_end];
        let text = untrimmed.trim();
        let start = self.index + (untrimmed.len() - untrimmed.trim_start().len());
        let raw = RawLine {
            line: self.line,
            range: start..start + text.len(),
            text,
        };
        self.line += 1;
        self.index = next_index;
        Some(raw)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = RawLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
