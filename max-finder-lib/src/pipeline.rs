//! Turns a raw input line into the maximum of the integers it contains.
//!
//! Tokens are separated by the space character only. A token either parses
//! as a whole base-10 `i32` literal or is dropped; nothing in this module
//! can fail.

/// The result of running the pipeline over one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one token parsed; holds the greatest parsed value.
    Found(i32),
    /// No token parsed as an integer.
    Empty,
}

impl Outcome {
    /// Returns the maximum, if one was found.
    pub fn value(&self) -> Option<i32> {
        match self {
            Outcome::Found(value) => Some(*value),
            Outcome::Empty => None,
        }
    }
}

impl From<Option<i32>> for Outcome {
    fn from(max: Option<i32>) -> Self {
        max.map_or(Outcome::Empty, Outcome::Found)
    }
}

/// Splits a line into tokens on the space character.
///
/// Runs of spaces yield empty tokens, and tabs are ordinary characters.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ')
}

/// Code points of the zero digit of every Unicode decimal-digit (Nd) run.
/// Each run holds the ten digits `0..=9` consecutively.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns the value of `c` if it is a decimal digit in any script.
fn decimal_digit(c: char) -> Option<i32> {
    let code = c as u32;
    let zero = match DECIMAL_ZEROS.binary_search(&code) {
        Ok(index) => DECIMAL_ZEROS[index],
        Err(0) => return None,
        Err(index) => DECIMAL_ZEROS[index - 1],
    };

    let offset = code - zero;
    (offset < 10).then_some(offset as i32)
}

/// Parses a single token as a signed base-10 integer.
///
/// The whole token must be a literal: an optional `+` or `-` followed by
/// decimal digits from any script (`"٣"` and `"１２"` parse), within `i32`
/// range.
pub fn parse_token(token: &str) -> Option<i32> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if digits.is_empty() {
        return None;
    }

    // Accumulated as a negative number so that i32::MIN stays representable.
    let mut value: i32 = 0;
    for c in digits.chars() {
        let digit = decimal_digit(c)?;
        value = value.checked_mul(10)?.checked_sub(digit)?;
    }

    if negative {
        Some(value)
    } else {
        value.checked_neg()
    }
}

/// Computes the maximum integer contained in `line`.
///
/// # Examples
///
/// ```rust
/// use max_finder_lib::pipeline::{compute_max, Outcome};
///
/// assert_eq!(compute_max("5 x 9 -3"), Outcome::Found(9));
/// assert_eq!(compute_max("a b c"), Outcome::Empty);
/// ```
pub fn compute_max(line: &str) -> Outcome {
    tokenize(line).filter_map(parse_token).max().into()
}

/// The pipeline's view of a line with the rejected tokens kept around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis<'a> {
    values: Vec<i32>,
    rejected: Vec<&'a str>,
}

impl<'a> Analysis<'a> {
    /// Integers that parsed, in input order.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Tokens that did not parse, in input order. Empty tokens produced by
    /// repeated spaces are not listed.
    pub fn rejected(&self) -> &[&'a str] {
        &self.rejected
    }

    /// The maximum of [`Analysis::values`], as [`compute_max`] reports it.
    pub fn outcome(&self) -> Outcome {
        self.values.iter().copied().max().into()
    }
}

/// Runs the pipeline over `line`, keeping track of every rejected token.
pub fn analyze(line: &str) -> Analysis<'_> {
    let mut analysis = Analysis::default();

    for token in tokenize(line) {
        match parse_token(token) {
            Some(value) => analysis.values.push(value),
            None if token.is_empty() => {}
            None => analysis.rejected.push(token),
        }
    }

    log::debug!(
        "Parsed {} integer(s), rejected {} token(s)",
        analysis.values.len(),
        analysis.rejected.len()
    );

    analysis
}
