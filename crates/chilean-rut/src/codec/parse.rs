//! Textual grammar for RUT bodies and check characters.
//!
//! Accepted combined notations (check character is case-insensitive):
//! - `12345678-k`
//! - `12345678k`
//! - `12.345.678-k`
//! - `12.345.678k`

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::codec::checksum::{compute_check_character, is_check_character};
use crate::error::RutError;
use crate::limits::MAX_BODY;
use crate::model::Rut;

lazy_static! {
    /// Up to 8 significant digits, no leading zero, thousands groups of 3
    /// with each separating dot optional.
    static ref BODY_PATTERN: Regex =
        Regex::new(r"^([1-9][0-9]?(\.?[0-9]{3}){0,2}|[1-9][0-9]{0,2}(\.?[0-9]{3})?)$")
            .expect("invalid rut body pattern");
}

/// Builds a RUT from a body text and a check character text.
///
/// The body may be grouped with dots; the check character is stored lowercase.
/// Neither part is checked against the other, see [`Rut::is_valid`].
pub fn construct(number: &str, check: &str) -> Result<Rut, RutError> {
    let body = parse_body(number)?;
    let check = parse_check_character(check)?;
    Ok(Rut::from_raw(body, check))
}

/// Parses a combined body + check character string.
///
/// Empty or whitespace-only input yields [`Rut::EMPTY`].
pub fn parse(raw: &str) -> Result<Rut, RutError> {
    if raw.trim().is_empty() {
        return Ok(Rut::EMPTY);
    }

    // non-empty, so there is a last char
    let split = raw.char_indices().next_back().map_or(0, |(i, _)| i);
    let (number, check) = raw.split_at(split);
    let number = number.strip_suffix('-').unwrap_or(number);
    construct(number, check)
}

/// Builds the valid RUT for a body, computing its check character.
///
/// Fails for zero and for bodies with more than 8 digits.
pub fn from_number(body: u32) -> Result<Rut, RutError> {
    if body == 0 || body > MAX_BODY {
        trace!(body, "body outside rut grammar");
        return Err(RutError::malformed_body(body.to_string()));
    }
    Ok(Rut::from_raw(body, compute_check_character(body)))
}

fn parse_body(number: &str) -> Result<u32, RutError> {
    if !BODY_PATTERN.is_match(number) {
        trace!(number, "rejected rut body");
        return Err(RutError::malformed_body(number));
    }
    let digits: String = number.chars().filter(|c| *c != '.').collect();
    digits
        .parse()
        .map_err(|_| RutError::malformed_body(number))
}

fn parse_check_character(check: &str) -> Result<char, RutError> {
    let mut chars = check.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_check_character(c.to_ascii_lowercase()) => {
            Ok(c.to_ascii_lowercase())
        }
        _ => {
            trace!(check, "rejected check character");
            Err(RutError::malformed_check(check))
        }
    }
}
