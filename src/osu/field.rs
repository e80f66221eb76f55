//! Codecs for the atomic field shapes of the `.osu` format.
//!
//! Every section and record decoder is built on these helpers, so a malformed value is reported
//! the same way wherever it appears.

use std::str::FromStr;

use thiserror::Error;

/// An error occurred when converting a single field value.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    /// A non-integer text was in an integer slot.
    #[error("expected integer, but found `{0}`")]
    InvalidInteger(String),
    /// A non-numeric text was in a floating point slot.
    #[error("expected number, but found `{0}`")]
    InvalidFloat(String),
    /// A flag was neither `0` nor `1`.
    #[error("expected `0` or `1`, but found `{0}`")]
    InvalidFlag(String),
    /// The sample set was not recognized.
    #[error("unknown sample set `{0}`")]
    InvalidSampleSet(String),
    /// The countdown speed was not recognized.
    #[error("unknown countdown `{0}`")]
    InvalidCountdown(String),
    /// The game mode was not recognized.
    #[error("unknown game mode `{0}`")]
    InvalidGameMode(String),
    /// The slider curve tag was not recognized.
    #[error("unknown curve type `{0}`")]
    InvalidCurveType(String),
    /// A record ended before a required field.
    #[error("missing field #{index} in `{record}`")]
    MissingField {
        /// 0-based index of the missing field.
        index: usize,
        /// The whole record text.
        record: String,
    },
    /// A compound value lacked its separator.
    #[error("expected `{delimiter}` in `{text}`")]
    MissingDelimiter {
        /// The separator expected.
        delimiter: char,
        /// The text searched.
        text: String,
    },
    /// The hit object type bits matched none of the hit object shapes.
    #[error("unknown hit object type {0}")]
    UnknownHitObjectKind(u8),
}

/// Type alias of `core::result::Result<T, FieldError>`
pub(crate) type Result<T> = core::result::Result<T, FieldError>;

/// Parses a trimmed integer field.
pub(crate) fn parse_int<T: FromStr>(text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| FieldError::InvalidInteger(text.to_string()))
}

/// Parses a trimmed floating point field.
pub(crate) fn parse_float(text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| FieldError::InvalidFloat(text.to_string()))
}

/// Parses a flag written as `0` or `1`.
pub(crate) fn parse_flag(text: &str) -> Result<bool> {
    match text {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(FieldError::InvalidFlag(text.to_string())),
    }
}

/// Formats a flag as `0` or `1`.
pub(crate) const fn flag_str(flag: bool) -> &'static str {
    if flag { "1" } else { "0" }
}

/// Splits a `key:value` line at the first colon, trimming both sides.
pub(crate) fn split_key_value(line: &str) -> Result<(&str, &str)> {
    split_once_at(line, ':').map(|(key, value)| (key.trim(), value.trim()))
}

/// Splits the text at the first `delimiter`, without trimming.
pub(crate) fn split_once_at(text: &str, delimiter: char) -> Result<(&str, &str)> {
    text.split_once(delimiter)
        .ok_or_else(|| FieldError::MissingDelimiter {
            delimiter,
            text: text.to_string(),
        })
}

/// Parses a `delimiter`-joined list. An empty text is an empty list.
pub(crate) fn parse_list<T>(
    text: &str,
    delimiter: char,
    parse_item: impl Fn(&str) -> Result<T>,
) -> Result<Vec<T>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(delimiter).map(parse_item).collect()
}

/// Comma separated fields of one record, with indexed access reporting missing ones.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    record: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(record: &'a str) -> Self {
        Self {
            record,
            fields: record.split(',').collect(),
        }
    }

    /// Splits at most `limit` fields, leaving the rest joined in the last one.
    pub(crate) fn with_limit(record: &'a str, limit: usize) -> Self {
        Self {
            record,
            fields: record.splitn(limit, ',').collect(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    pub(crate) fn require(&self, index: usize) -> Result<&'a str> {
        self.get(index).ok_or_else(|| FieldError::MissingField {
            index,
            record: self.record.to_string(),
        })
    }

    pub(crate) fn int<T: FromStr>(&self, index: usize) -> Result<T> {
        parse_int(self.require(index)?)
    }

    pub(crate) fn float(&self, index: usize) -> Result<f64> {
        parse_float(self.require(index)?)
    }
}
