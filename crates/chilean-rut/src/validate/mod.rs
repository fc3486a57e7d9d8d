//! Validation helpers for RUTs held by application code.
//!
//! Parsing only checks that a RUT is well-formed. This module turns validity
//! into caller-visible failures:
//! - [`Rut::ensure_valid`] and friends fail when the check character doesn't
//!   match the body, with a caller-selectable error
//! - [`RutRule`] checks a field holding a parsed RUT or raw text, optionally
//!   requiring a minimum body length or one exact rendering
//! - [`validate_rut_pair`] checks a body field and a check character field
//!   that are stored separately

use std::fmt::Display;

use crate::error::{RutError, ValidationError};
use crate::model::{Rut, RutFormat};

/// Message used when the caller doesn't supply one.
pub const DEFAULT_MESSAGE: &str = "invalid rut";

impl Rut {
    /// Fails with [`RutError::InvalidChecksum`] if this RUT is not valid.
    pub fn ensure_valid(&self) -> Result<(), RutError> {
        self.ensure_valid_msg(DEFAULT_MESSAGE)
    }

    /// Like [`Rut::ensure_valid`], with a custom message.
    pub fn ensure_valid_msg(&self, message: impl Into<String>) -> Result<(), RutError> {
        self.ensure_valid_with(|rut| RutError::InvalidChecksum {
            rut: rut.to_string(),
            expected: rut.expected_check(),
            message: message.into(),
        })
    }

    /// Fails with the error built by `err` if this RUT is not valid.
    ///
    /// Lets applications map checksum failures onto their own error types.
    pub fn ensure_valid_with<E, F>(&self, err: F) -> Result<(), E>
    where
        F: FnOnce(&Rut) -> E,
    {
        if self.is_valid() {
            Ok(())
        } else {
            Err(err(self))
        }
    }
}

/// A field value to validate: either an already parsed RUT or raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Rut(&'a Rut),
    Text(&'a str),
}

impl<'a> From<&'a Rut> for FieldValue<'a> {
    fn from(rut: &'a Rut) -> Self {
        FieldValue::Rut(rut)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(text: &'a str) -> Self {
        FieldValue::Text(text)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(text: &'a String) -> Self {
        FieldValue::Text(text.as_str())
    }
}

/// Field-level RUT validity rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RutRule {
    /// Minimum number of digits in the body.
    pub min_length: usize,
    /// When set, raw text must be exactly this rendering of itself.
    pub format: Option<RutFormat>,
    /// Message reported on failure.
    pub message: String,
}

impl Default for RutRule {
    fn default() -> Self {
        Self {
            min_length: 0,
            format: None,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl RutRule {
    /// Creates a rule accepting any valid RUT in any notation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `min_length` body digits.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Requires raw text to be written in `format`.
    pub fn with_format(mut self, format: RutFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns true if the value satisfies this rule.
    ///
    /// Text that fails to parse is simply invalid.
    pub fn is_valid<'a>(&self, value: impl Into<FieldValue<'a>>) -> bool {
        match value.into() {
            FieldValue::Rut(rut) => self.is_valid_rut(rut),
            FieldValue::Text(text) => self.is_valid_text(text),
        }
    }

    /// Validates the value, naming `field` in the failure.
    pub fn validate<'a>(
        &self,
        field: &str,
        value: impl Into<FieldValue<'a>>,
    ) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidField {
                field: field.to_string(),
                message: self.message.clone(),
            })
        }
    }

    fn is_valid_rut(&self, rut: &Rut) -> bool {
        rut.is_valid() && rut.body_len() >= self.min_length
    }

    fn is_valid_text(&self, text: &str) -> bool {
        let Ok(rut) = Rut::parse(text) else {
            return false;
        };
        if self.format.is_some_and(|format| rut.format(format) != text) {
            return false;
        }
        self.is_valid_rut(&rut)
    }
}

/// Validates a RUT whose body and check character live in separate fields.
///
/// The body may be numeric or text. `check_field` is named in the failure.
/// Only the rule's minimum length and message apply; the joined text is not
/// held to the rule's format.
pub fn validate_rut_pair(
    check_field: &str,
    body: impl Display,
    check: &str,
    rule: &RutRule,
) -> Result<(), ValidationError> {
    let pair_rule = RutRule {
        format: None,
        ..rule.clone()
    };
    let combined = format!("{}-{}", body, check);
    pair_rule.validate(check_field, combined.as_str())
}
