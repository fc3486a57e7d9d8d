//! The RUT value type.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::RutError;
use crate::model::RutFormat;

/// A Chilean RUT: a numeric body plus a check character.
///
/// A `Rut` is well-formed by construction (body in grammar, check character in
/// `[0-9k]`), but not necessarily valid: use [`Rut::is_valid`] to compare the
/// check character against the one computed from the body.
///
/// Ordering is by body first, so sorting a list of RUTs sorts by numeric
/// identity whether or not every entry is valid. Equal bodies fall back to the
/// check character to stay consistent with equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rut {
    // field order drives the derived ordering
    body: u32,
    check: Option<char>,
}

impl Rut {
    /// Sentinel produced by parsing empty or whitespace-only input.
    ///
    /// It has no check character, is never valid, and renders as `""`.
    pub const EMPTY: Rut = Rut {
        body: 0,
        check: None,
    };

    pub(crate) const fn from_raw(body: u32, check: char) -> Self {
        Self {
            body,
            check: Some(check),
        }
    }

    /// Creates a RUT from its body text (plain or dot-grouped) and check character text.
    ///
    /// ```rust
    /// use chilean_rut::Rut;
    ///
    /// let rut = Rut::new("21.198.663", "8").unwrap();
    /// assert!(rut.is_valid());
    /// ```
    pub fn new(number: &str, check: &str) -> Result<Self, RutError> {
        codec::construct(number, check)
    }

    /// Parses a combined string such as `12.345.678-5`, `12345678-5` or `123456785`.
    pub fn parse(raw: &str) -> Result<Self, RutError> {
        codec::parse(raw)
    }

    /// Creates the valid RUT for `body`.
    pub fn from_number(body: u32) -> Result<Self, RutError> {
        codec::from_number(body)
    }

    /// Numeric body, without grouping. Zero only for [`Rut::EMPTY`].
    pub fn body(&self) -> u32 {
        self.body
    }

    /// Check character, always lowercase. `None` only for [`Rut::EMPTY`].
    pub fn check(&self) -> Option<char> {
        self.check
    }

    /// Returns true for the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.check.is_none()
    }

    /// Splits into `(body, check)`.
    pub fn into_parts(self) -> (u32, Option<char>) {
        (self.body, self.check)
    }

    /// Number of decimal digits in the body.
    pub fn body_len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.body.to_string().len()
        }
    }

    /// Check character the body calls for, or `None` for the empty sentinel.
    pub fn expected_check(&self) -> Option<char> {
        self.check
            .map(|_| codec::compute_check_character(self.body))
    }

    /// Returns true if the check character matches the body.
    pub fn is_valid(&self) -> bool {
        match self.check {
            Some(check) => codec::compute_check_character(self.body) == check,
            None => false,
        }
    }

    /// Renders this RUT in the given format.
    pub fn format(&self, mode: RutFormat) -> String {
        codec::format(self, mode)
    }
}

/// Displays the dash-only form, `12345678-5`.
impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(RutFormat::OnlyDash))
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rut::parse(s)
    }
}

impl TryFrom<&str> for Rut {
    type Error = RutError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Rut::parse(s)
    }
}

impl TryFrom<u32> for Rut {
    type Error = RutError;

    fn try_from(body: u32) -> Result<Self, Self::Error> {
        Rut::from_number(body)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rut {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rut {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Rut::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;

    #[test]
    fn test_valid_with_constructor() {
        let cases = [
            ("1", "9"),
            ("21198663", "8"),
            ("21313774", "3"),
            ("13239959", "k"),
            ("21770960", "1"),
            ("19963722", "3"),
            ("11765793", "0"),
            ("14713193", "3"),
            ("14449209", "9"),
            ("15605286", "8"),
            ("5942232", "4"),
        ];
        for (number, check) in cases {
            assert!(Rut::new(number, check).unwrap().is_valid(), "{}-{}", number, check);
        }
    }

    #[test]
    fn test_invalid_with_constructor() {
        let cases = [
            ("1", "0"),
            ("21198663", "7"),
            ("21313774", "4"),
            ("13239959", "1"),
            ("21770960", "2"),
            ("19963722", "6"),
            ("11765793", "7"),
            ("14713193", "9"),
            ("14449209", "0"),
            ("15605286", "k"),
            ("5942232", "1"),
        ];
        for (number, check) in cases {
            assert!(!Rut::new(number, check).unwrap().is_valid(), "{}-{}", number, check);
        }
    }

    #[test]
    fn test_parse_and_validate() {
        assert!(Rut::parse("19253299-k").unwrap().is_valid());
        assert!(Rut::parse("19253299K").unwrap().is_valid());
        assert!("19.253.299-K".parse::<Rut>().unwrap().is_valid());
        assert!(Rut::try_from("19.253.299k").unwrap().is_valid());
    }

    #[test]
    fn test_from_number_is_valid() {
        for body in [1, 12, 123, 1234, 12345, 123456, 1234567, 12345678] {
            let rut = Rut::from_number(body).unwrap();
            assert!(rut.is_valid());
            assert_eq!(rut.body(), body);
        }
        assert!(Rut::try_from(0u32).is_err());
    }

    #[test]
    fn test_empty_sentinel() {
        let rut = Rut::parse("").unwrap();
        assert!(rut.is_empty());
        assert!(!rut.is_valid());
        assert_eq!(rut.check(), None);
        assert_eq!(rut.expected_check(), None);
        assert_eq!(rut.body_len(), 0);
        assert_eq!(rut.to_string(), "");
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert!(matches!(Rut::parse("0k"), Err(RutError::MalformedBody { .. })));
    }

    #[test]
    fn test_format_and_display() {
        let rut = Rut::new("15605286", "8").unwrap();
        assert_eq!(rut.format(RutFormat::Full), "15.605.286-8");
        assert_eq!(rut.format(RutFormat::OnlyDash), "15605286-8");
        assert_eq!(rut.format(RutFormat::Escaped), "156052868");
        assert_eq!(rut.to_string(), "15605286-8");
    }

    #[test]
    fn test_into_parts() {
        for (number, check) in [("1", "9"), ("12345678", "k"), ("12345678", "K")] {
            let (body, dv) = Rut::new(number, check).unwrap().into_parts();
            assert_eq!(body.to_string(), number);
            assert_eq!(dv, check.to_lowercase().chars().next());
        }
    }

    #[test]
    fn test_expected_check() {
        let rut = Rut::new("21198663", "7").unwrap();
        assert_eq!(rut.expected_check(), Some('8'));
        assert_eq!(rut.body_len(), 8);
    }

    #[test]
    fn test_compare() {
        let rut1 = Rut::new("1234", "3").unwrap();
        let rut2 = Rut::new("1345", "5").unwrap();
        assert!(rut1 < rut2);
        assert!(!(rut1 > rut2));

        // body dominates the check character
        let low_k = Rut::new("1234", "k").unwrap();
        let high_0 = Rut::new("1345", "0").unwrap();
        assert!(low_k < high_0);
    }

    #[test]
    fn test_equality() {
        let rut1 = Rut::new("1234", "3").unwrap();
        let rut2 = Rut::new("1345", "5").unwrap();
        let rut3 = Rut::new("1.234", "3").unwrap();
        assert_eq!(rut1, rut3);
        assert_ne!(rut1, rut2);
        assert_ne!(rut1, Rut::new("1234", "4").unwrap());
    }

    #[test]
    fn test_hash_and_sets() {
        let a = Rut::new("1234", "3").unwrap();
        let b = Rut::new("1234", "4").unwrap();
        let c = Rut::new("1.234", "3").unwrap();

        let hashed: HashSet<Rut> = [a, b, c].into_iter().collect();
        assert_eq!(hashed.len(), 2);

        let ordered: BTreeSet<Rut> = [a, b, c].into_iter().collect();
        assert_eq!(ordered.len(), 2);
    }

    #[test]
    fn test_sort_by_body() {
        let mut ruts = vec![
            Rut::new("21198663", "8").unwrap(),
            Rut::new("1", "0").unwrap(),
            Rut::new("5942232", "4").unwrap(),
            Rut::new("13239959", "k").unwrap(),
        ];
        ruts.sort();
        let bodies: Vec<u32> = ruts.iter().map(Rut::body).collect();
        assert_eq!(bodies, vec![1, 5942232, 13239959, 21198663]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let rut = Rut::new("15.605.286", "8").unwrap();
        let json = serde_json::to_string(&rut).unwrap();
        assert_eq!(json, "\"15605286-8\"");
        let back: Rut = serde_json::from_str("\"15.605.286-8\"").unwrap();
        assert_eq!(back, rut);
        assert!(serde_json::from_str::<Rut>("\"0k\"").is_err());
    }
}
