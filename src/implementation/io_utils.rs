// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides everything that is needed to turn the raw text of
//! an input file into validated cases, and to turn the selections computed
//! by a solver back into text.
//!
//! Each line of the input describes one case:
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76)
//! ```
//! The capacity comes before the colon; each parenthesized item is made of
//! an identifier, a weight with (at most) two significant decimals and a
//! value prefixed with the euro sign.

use std::{fs, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{CaseInput, Item, Selection, Value, Weight, SCALE};

/// The character separating the capacity from the items of a case
pub const DELIMITER: char = ':';
/// The marker every item value must start with
pub const VALUE_MARKER: char = '€';
/// What is printed for a case where no item gets selected
pub const NOTHING: &str = "-";

/// Splits the items field on `) (`, `(` and `)`
static ITEM_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\) \(|\(|\)").expect("the item separator is a valid regex")
});

/// This enumeration groups the kind of errors that might occur when reading
/// the cases of an input file. There can be io errors (file unavailable ?),
/// an input that is entirely blank, or a line which is not properly
/// formatted. All of them (but io errors) carry the index of the offending
/// line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The input contains nothing but whitespace
    #[error("The file is empty.")]
    EmptyInput,
    /// The line has no colon to separate the capacity from the items
    #[error("Incorrect parameters: there is no colon in the line {line}")]
    MissingDelimiter { line: usize },
    /// The capacity is missing or is not a non-negative decimal number
    #[error("Incorrect parameters: could not parse a pack size in the line {line}")]
    InvalidCapacity { line: usize },
    /// There is nothing after the colon
    #[error("Incorrect parameters: there is no items to pack in the line {line}")]
    MissingItemsField { line: usize },
    /// One of the items of the line is ill formed
    #[error("Incorrect parameters in the line {line}: {source}")]
    MalformedItem {
        line: usize,
        #[source]
        source: ItemError,
    },
}

/// The discriminant of an `Error`, for the callers that need to react to
/// the kind of problem without looking at the message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    EmptyInput,
    MissingDelimiter,
    InvalidCapacity,
    MissingItemsField,
    MalformedItem,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_)                   => ErrorKind::Io,
            Error::EmptyInput              => ErrorKind::EmptyInput,
            Error::MissingDelimiter  { .. } => ErrorKind::MissingDelimiter,
            Error::InvalidCapacity   { .. } => ErrorKind::InvalidCapacity,
            Error::MissingItemsField { .. } => ErrorKind::MissingItemsField,
            Error::MalformedItem     { .. } => ErrorKind::MalformedItem,
        }
    }
    /// The index (starting at 0) of the line that caused this error
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io(_) | Error::EmptyInput => None,
            Error::MissingDelimiter  { line }
            | Error::InvalidCapacity { line }
            | Error::MissingItemsField { line }
            | Error::MalformedItem { line, .. } => Some(*line),
        }
    }
    /// The text of the offending item token, if an item caused this error
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::MalformedItem { source, .. } => Some(&source.token),
            _ => None,
        }
    }
}

/// The error raised when an item token does not match `id,weight,€value`.
/// It quotes the token exactly as it was handed to the item parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Item [{token}] has the wrong format.")]
pub struct ItemError {
    pub token: String,
}

/// Reads the whole content of the given file.
pub fn read_input<P: AsRef<Path>>(fname: P) -> Result<String, Error> {
    Ok(fs::read_to_string(fname)?)
}

/// Parses all the cases of the given input text. The first ill formed line
/// aborts the whole process: no partial result is ever returned.
pub fn parse_input(text: &str) -> Result<Vec<CaseInput>, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut lines = text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect::<Vec<_>>();
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }

    lines.iter().enumerate()
        .map(|(i, line)| parse_case(line, i))
        .collect()
}

/// Parses one line of the input into a case. The `line_index` is only used
/// to report errors.
pub fn parse_case(line: &str, line_index: usize) -> Result<CaseInput, Error> {
    let (capacity, items) = line.split_once(DELIMITER)
        .ok_or(Error::MissingDelimiter { line: line_index })?;

    let capacity = parse_hundredths(capacity.trim())
        .ok_or(Error::InvalidCapacity { line: line_index })?;

    let items = items.trim();
    if items.is_empty() {
        return Err(Error::MissingItemsField { line: line_index });
    }

    let items = ITEM_SEPARATOR.split(items)
        .filter(|token| !token.trim().is_empty())
        .map(parse_item)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| Error::MalformedItem { line: line_index, source })?;

    Ok(CaseInput::new(capacity, items))
}

/// Parses one item token (`id,weight,€value`, without the parentheses).
pub fn parse_item(token: &str) -> Result<Item, ItemError> {
    let wrong_format = || ItemError { token: token.to_string() };

    let fields = token.split(',').collect::<Vec<_>>();
    let [id, weight, value] = fields.as_slice() else {
        return Err(wrong_format());
    };
    if id.is_empty() {
        return Err(wrong_format());
    }
    let value = value.strip_prefix(VALUE_MARKER)
        .and_then(parse_integer)
        .ok_or_else(wrong_format)?;
    let weight = parse_hundredths(weight).ok_or_else(wrong_format)?;

    Ok(Item::new(*id, weight, value))
}

/// Converts a non-negative decimal number into hundredths. The number is
/// multiplied by 100 *then* truncated, directly on its digits so that no
/// precision is ever lost (`8.75` -> 875, `0.299` -> 29, `12` -> 1200).
/// Returns `None` when the text is not such a number (or overflows).
pub fn parse_hundredths(text: &str) -> Option<Weight> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let whole = if whole.is_empty() { 0 } else { whole.parse::<Weight>().ok()? };
    let cents = fraction.bytes()
        .chain(std::iter::repeat(b'0'))
        .take(2)
        .fold(0, |acc, digit| acc * 10 + (digit - b'0') as Weight);

    whole.checked_mul(SCALE)?.checked_add(cents)
}

/// Parses a non-negative integer made of ascii digits only
fn parse_integer(text: &str) -> Option<Value> {
    if text.is_empty() || !all_digits(text) {
        None
    } else {
        text.parse().ok()
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Renders a selection the way it is expected in the output: the comma
/// separated identifiers in solver order, or a dash when nothing is packed.
pub fn format_selection(selection: &Selection) -> String {
    if selection.ids.is_empty() {
        NOTHING.to_string()
    } else {
        selection.ids.join(",")
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
