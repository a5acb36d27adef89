//! ISBN-13 construction and validation.
//!
//! Generated ISBNs are built from a numeric payload: its decimal form is
//! left-padded with zeros to twelve digits, and only the first twelve
//! characters are kept when it is longer. Very large book indices are
//! therefore truncated rather than padded, which can make two payloads share
//! the same digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IsbnError;

const PAYLOAD_DIGITS: usize = 12;
const ISBN_DIGITS: usize = 13;

/// A validated ISBN-13.
///
/// Displays and serialises in the hyphenated `978-1-23456-789-7` grouping.
///
/// # Example
///
/// ```
/// use book_data::Isbn13;
///
/// let isbn = Isbn13::from_payload(1_000);
/// assert_eq!(isbn.to_string(), "000-0-00001-000-9");
///
/// let parsed: Isbn13 = "978-0-30640-615-7".parse().expect("valid ISBN");
/// assert_eq!(parsed.check_digit_value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn13 {
    digits: [u8; ISBN_DIGITS],
}

impl Isbn13 {
    /// Builds an ISBN from a numeric payload and appends its check digit.
    #[must_use]
    pub fn from_payload(payload: u64) -> Self {
        let decimal = format!("{payload:0>width$}", width = PAYLOAD_DIGITS);
        let mut payload_digits = [0_u8; PAYLOAD_DIGITS];
        for (slot, c) in payload_digits.iter_mut().zip(decimal.chars()) {
            *slot = c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .unwrap_or_default();
        }
        Self::from_payload_digits(payload_digits)
    }

    fn from_payload_digits(payload: [u8; PAYLOAD_DIGITS]) -> Self {
        let mut digits = [0_u8; ISBN_DIGITS];
        for (slot, digit) in digits.iter_mut().zip(payload) {
            *slot = digit;
        }
        if let Some(last) = digits.last_mut() {
            *last = check_digit(&payload);
        }
        Self { digits }
    }

    /// Returns all thirteen digits.
    #[must_use]
    pub const fn digits(&self) -> &[u8; ISBN_DIGITS] {
        &self.digits
    }

    /// Returns the trailing check digit.
    #[must_use]
    pub fn check_digit_value(&self) -> u8 {
        self.digits.last().copied().unwrap_or_default()
    }
}

/// Computes the ISBN-13 check digit for twelve payload digits.
///
/// Digits at even positions weigh 1 and digits at odd positions weigh 3; the
/// check digit brings the weighted sum up to a multiple of ten.
///
/// # Example
///
/// ```
/// use book_data::isbn13_check_digit;
///
/// assert_eq!(isbn13_check_digit(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5]), 7);
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "the ISBN-13 checksum is defined modulo 10"
)]
pub fn check_digit(payload: &[u8; PAYLOAD_DIGITS]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(position, digit)| {
            let weight = if position % 2 == 0 { 1 } else { 3 };
            u32::from(*digit) * weight
        })
        .sum();
    let check = (10 - sum % 10) % 10;
    u8::try_from(check).unwrap_or_default()
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, digit) in self.digits.iter().enumerate() {
            if matches!(position, 3 | 4 | 9 | 12) {
                f.write_str("-")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .filter(|c| *c != '-')
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(IsbnError::InvalidCharacter { character: c })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let (payload_slice, actual) = match digits.split_last() {
            Some((last, rest)) if digits.len() == ISBN_DIGITS => (rest, *last),
            _ => {
                return Err(IsbnError::WrongLength {
                    found: digits.len(),
                });
            }
        };
        let payload: [u8; PAYLOAD_DIGITS] =
            payload_slice
                .try_into()
                .map_err(|_| IsbnError::WrongLength {
                    found: digits.len(),
                })?;

        let expected = check_digit(&payload);
        if expected != actual {
            return Err(IsbnError::CheckDigitMismatch { expected, actual });
        }
        Ok(Self::from_payload_digits(payload))
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Isbn13> for String {
    fn from(value: Isbn13) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case([9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5], 7)]
    #[case([9, 7, 8, 1, 8, 6, 1, 9, 7, 2, 7, 1], 2)]
    #[case([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 0)]
    fn computes_known_check_digits(#[case] payload: [u8; 12], #[case] expected: u8) {
        assert_eq!(check_digit(&payload), expected);
    }

    #[test]
    fn pads_short_payloads_with_leading_zeros() {
        let isbn = Isbn13::from_payload(1_042);
        assert_eq!(
            isbn.digits().get(..12),
            Some(&[0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 4, 2][..])
        );
    }

    #[test]
    fn truncates_payloads_longer_than_twelve_digits() {
        let isbn = Isbn13::from_payload(12_345_678_901_234);
        assert_eq!(
            isbn.digits().get(..12),
            Some(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2][..])
        );
    }

    #[test]
    fn formats_in_three_one_five_three_one_groups() {
        let isbn: Isbn13 = "9780306406157".parse().expect("valid ISBN");
        assert_eq!(isbn.to_string(), "978-0-30640-615-7");
    }

    #[rstest]
    #[case("978-0-30640-615-7")]
    #[case("9780306406157")]
    fn parses_hyphenated_and_bare_forms(#[case] input: &str) {
        assert!(input.parse::<Isbn13>().is_ok());
    }

    #[rstest]
    #[case("978-0-30640-615-3", IsbnError::CheckDigitMismatch { expected: 7, actual: 3 })]
    #[case("978-0-30640", IsbnError::WrongLength { found: 9 })]
    #[case("978-0-30640-615-7X", IsbnError::InvalidCharacter { character: 'X' })]
    fn rejects_invalid_isbns(#[case] input: &str, #[case] expected: IsbnError) {
        assert_eq!(input.parse::<Isbn13>(), Err(expected));
    }

    #[test]
    fn generated_isbns_parse_back() {
        for payload in [0, 1_000, 999_999, 20_000_999, 123_456_789_012] {
            let isbn = Isbn13::from_payload(payload);
            assert_eq!(isbn.to_string().parse::<Isbn13>(), Ok(isbn));
        }
    }

    #[test]
    fn serializes_as_hyphenated_string() {
        let isbn = Isbn13::from_payload(1_000);
        let json = serde_json::to_string(&isbn).expect("serialize");
        assert_eq!(json, "\"000-0-00001-000-9\"");
    }
}
