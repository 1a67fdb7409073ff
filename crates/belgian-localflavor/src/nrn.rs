//! Belgian National Register Number (rijksregisternummer / numéro de
//! registre national).
//!
//! An NRN is eleven digits `YYMMDDSSSCC`: birth date, a sequence counter
//! and a two-digit checksum. The checksum is `97 - (YYMMDDSSS mod 97)` for
//! people born before 2000, and the same computation over `2YYMMDDSSS` for
//! people born in or after 2000. The two-digit year is ambiguous, so both
//! candidates are accepted.
//!
//! Three representations are handled here:
//! - raw input, with arbitrary separators (`85.07.30-033.28`, `850730 033 28`),
//! - canonical form, eleven ASCII digits (`85073003328`),
//! - display form, `YY.MM.DD-SSS.CC`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::raw::RawValue;
use crate::validation::ValidationError;

/// Number of digits in a canonical NRN.
pub const NRN_LEN: usize = 11;

/// Default message for a value that is not a valid NRN.
pub const INVALID_NRN_MESSAGE: &str =
    "Numéro de Registre National non valide (00.00.00-000.00).";

const MODULUS: u64 = 97;
const POST_2000_PREFIX: u64 = 2_000_000_000;

/// Strips every non-digit character from `raw`, keeping digit order.
///
/// Returns `None` for [`RawValue::Absent`] and the input itself for empty
/// text, so empty-equivalent values pass through unchanged.
pub fn extract_digits<'a>(raw: impl Into<RawValue<'a>>) -> Option<Cow<'a, str>> {
    match raw.into() {
        RawValue::Absent => None,
        RawValue::Text(text) => Some(digits_only(text)),
    }
}

/// Checks that `raw` is empty-equivalent or a checksum-valid NRN.
///
/// Empty input is considered valid: whether a value is required is the
/// field's concern, not the format's.
pub fn is_valid<'a>(raw: impl Into<RawValue<'a>>) -> bool {
    match raw.into().text() {
        None => true,
        Some(text) => checksum_era(&digits_only(text)).is_some(),
    }
}

/// Formats `raw` as `YY.MM.DD-SSS.CC`.
///
/// The value is not validated. Digits are sliced at fixed offsets, so a
/// canonical string of the wrong length yields a truncated display string
/// (`"123"` becomes `"12.3.-."`). Empty-equivalent input is returned
/// unchanged.
pub fn to_display_form<'a>(raw: impl Into<RawValue<'a>>) -> Option<Cow<'a, str>> {
    match raw.into() {
        RawValue::Absent => None,
        RawValue::Text("") => Some(Cow::Borrowed("")),
        RawValue::Text(text) => Some(Cow::Owned(display(&digits_only(text)))),
    }
}

/// Formats partially typed input, inserting separators as soon as the digit
/// before them has been entered.
///
/// At most eleven digits are kept: `"8507300"` becomes `"85.07.30-0"` and
/// `"85"` becomes `"85."`.
pub fn format_as_typed(raw: &str) -> String {
    let mut out = String::with_capacity(NRN_LEN + 4);
    for (i, c) in raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(NRN_LEN)
        .enumerate()
    {
        out.push(c);
        match i {
            1 | 3 | 8 => out.push('.'),
            5 => out.push('-'),
            _ => {}
        }
    }
    out
}

fn digits_only(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(char::is_ascii_digit).collect())
    }
}

fn display(canonical: &str) -> String {
    let len = canonical.len();
    // Clamped like a Python slice; offsets are increasing and the input is ASCII.
    let part = |start: usize, end: usize| &canonical[start.min(len)..end.min(len)];
    format!(
        "{}.{}.{}-{}.{}",
        part(0, 2),
        part(2, 4),
        part(4, 6),
        part(6, 9),
        part(9, 11)
    )
}

/// Which checksum formula a number satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Era {
    Pre2000,
    Post2000,
}

/// Checksum candidates for the nine leading digits, as `(pre_2000, post_2000)`.
///
/// A candidate can be 97 when its operand is divisible by 97. It is kept
/// as-is and compared against the check digits like any other value.
fn checksum_candidates(first9: u64) -> (u64, u64) {
    (
        MODULUS - first9 % MODULUS,
        MODULUS - (POST_2000_PREFIX + first9) % MODULUS,
    )
}

fn checksum_era(canonical: &str) -> Option<Era> {
    if canonical.len() != NRN_LEN {
        return None;
    }
    let first9: u64 = canonical[..9].parse().ok()?;
    let check: u64 = canonical[9..].parse().ok()?;
    let (pre_2000, post_2000) = checksum_candidates(first9);
    if check == pre_2000 {
        Some(Era::Pre2000)
    } else if check == post_2000 {
        Some(Era::Post2000)
    } else {
        None
    }
}

/// Sex encoded in the sequence counter: odd for men, even for women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Odd sequence number.
    Male,
    /// Even sequence number.
    Female,
}

/// A checksum-valid National Register Number in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Nrn(String);

impl Nrn {
    /// Parses any raw representation into a canonical NRN.
    ///
    /// Unlike [`is_valid`], empty input is rejected.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let canonical = digits_only(value);
        if checksum_era(&canonical).is_none() {
            return Err(ValidationError::InvalidNrn {
                message: INVALID_NRN_MESSAGE.to_string(),
            });
        }
        Ok(Self(canonical.into_owned()))
    }

    /// The eleven digits without separators.
    pub fn canonical(&self) -> &str {
        &self.0
    }

    /// `YYMMDD` as encoded; months and days may be zero for unknown dates.
    pub fn birth_date_digits(&self) -> &str {
        &self.0[..6]
    }

    /// The three-digit sequence counter.
    pub fn sequence(&self) -> u16 {
        self.digits(6, 9) as u16
    }

    /// The two check digits.
    pub fn check_digits(&self) -> u8 {
        self.digits(9, 11) as u8
    }

    /// True when only the post-2000 checksum matches.
    pub fn is_post_2000(&self) -> bool {
        checksum_era(&self.0) == Some(Era::Post2000)
    }

    /// Four-digit birth year, resolved through the checksum formula.
    pub fn birth_year(&self) -> u16 {
        let yy = self.digits(0, 2) as u16;
        if self.is_post_2000() {
            2000 + yy
        } else {
            1900 + yy
        }
    }

    /// Sex encoded in the sequence counter.
    pub fn sex(&self) -> Sex {
        if self.sequence() % 2 == 1 {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    // Only called on the validated canonical string.
    fn digits(&self, start: usize, end: usize) -> u64 {
        self.0[start..end]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
    }
}

impl fmt::Display for Nrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display(&self.0))
    }
}

impl FromStr for Nrn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nrn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Nrn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pre_2000_number_is_valid() {
        assert!(is_valid("85073003328"));
        assert_eq!(
            to_display_form("85073003328").as_deref(),
            Some("85.07.30-033.28")
        );
    }

    #[test]
    fn post_2000_number_is_valid() {
        assert!(is_valid("15.01.01-005.25"));
        let nrn = Nrn::parse("15010100525").unwrap();
        assert!(nrn.is_post_2000());
        assert_eq!(nrn.birth_year(), 2015);
    }

    #[test]
    fn separators_are_ignored() {
        for raw in ["85.07.30-033.28", "85 07 30 033 28", "850730-033.28", "93.05.05-079.13"] {
            assert!(is_valid(raw), "expected {raw} to be valid");
        }
    }

    #[test]
    fn wrong_checksums_are_rejected() {
        // 973 mod 97 = 3, 2000000973 mod 97 = 71: candidates 94 and 26.
        assert!(!is_valid("00000097334"));
        // candidates 58 and 87
        assert_eq!(extract_digits("12.34.56-789.99").as_deref(), Some("12345678999"));
        assert!(!is_valid("12.34.56-789.99"));
        assert!(!is_valid("85.07.30-033.29"));
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert!(!is_valid("123"));
        assert!(!is_valid("8507300332"));
        assert!(!is_valid("850730033288"));
        assert!(!is_valid("A5073003328"));
        assert!(!is_valid("   "));
    }

    #[test]
    fn empty_values_pass_through() {
        assert!(is_valid(""));
        assert!(is_valid(RawValue::Absent));
        assert_eq!(to_display_form("").as_deref(), Some(""));
        assert_eq!(to_display_form(RawValue::Absent), None);
        assert_eq!(extract_digits("").as_deref(), Some(""));
        assert_eq!(extract_digits(RawValue::Absent), None);
    }

    #[test]
    fn short_input_is_sliced_not_padded() {
        assert_eq!(to_display_form("123").as_deref(), Some("12.3.-."));
        assert_eq!(to_display_form("ab").as_deref(), Some("..-."));
        assert_eq!(
            to_display_form("8507300332812").as_deref(),
            Some("85.07.30-033.28")
        );
    }

    #[test]
    fn candidate_of_97_is_compared_verbatim() {
        // 970000000 is divisible by 97, so the pre-2000 candidate is 97.
        assert_eq!(checksum_candidates(970_000_000), (97, 29));
        assert!(is_valid("97000000097"));
        assert!(!is_valid("97000000000"));
        assert!(is_valid("97000000029"));
    }

    #[test]
    fn typed_input_gets_separators() {
        assert_eq!(format_as_typed(""), "");
        assert_eq!(format_as_typed("8"), "8");
        assert_eq!(format_as_typed("85"), "85.");
        assert_eq!(format_as_typed("8507300"), "85.07.30-0");
        assert_eq!(format_as_typed("85.07.30-033.28"), "85.07.30-033.28");
        assert_eq!(format_as_typed("850730033289999"), "85.07.30-033.28");
    }

    #[test]
    fn nrn_accessors() {
        let nrn: Nrn = "85.07.30-033.28".parse().unwrap();
        assert_eq!(nrn.canonical(), "85073003328");
        assert_eq!(nrn.birth_date_digits(), "850730");
        assert_eq!(nrn.sequence(), 33);
        assert_eq!(nrn.check_digits(), 28);
        assert_eq!(nrn.birth_year(), 1985);
        assert_eq!(nrn.sex(), Sex::Male);
        assert_eq!(nrn.to_string(), "85.07.30-033.28");
    }

    #[test]
    fn nrn_parse_rejects_empty_and_invalid() {
        let err = Nrn::parse("").unwrap_err();
        assert_eq!(err.code(), "invalid");
        assert_eq!(err.to_string(), INVALID_NRN_MESSAGE);
        assert!(Nrn::parse("85073003329").is_err());
    }

    proptest! {
        /// The arithmetic post-2000 candidate matches prefixing "2" to the digits.
        #[test]
        fn post_2000_candidate_matches_string_prefix(first9 in 0u64..1_000_000_000) {
            let prefixed: u64 = format!("2{first9:09}").parse().unwrap();
            let (_, post_2000) = checksum_candidates(first9);
            prop_assert_eq!(post_2000, MODULUS - prefixed % MODULUS);
        }

        /// Extraction keeps exactly the digits, in order, and is idempotent.
        #[test]
        fn extract_digits_keeps_digits_in_order(s in "[0-9 .\\-/a-z]{0,24}") {
            let expected: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            let once = extract_digits(s.as_str()).unwrap().into_owned();
            prop_assert_eq!(&once, &expected);
            let twice = extract_digits(once.as_str()).unwrap().into_owned();
            prop_assert_eq!(twice, once);
        }

        /// Any nine digits completed with their checksum round-trip through display form.
        #[test]
        fn display_form_round_trips(first9 in 0u64..1_000_000_000, post_2000 in any::<bool>()) {
            let (a, b) = checksum_candidates(first9);
            let check = if post_2000 { b } else { a };
            let canonical = format!("{first9:09}{check:02}");
            prop_assert!(is_valid(canonical.as_str()));
            let shown = to_display_form(canonical.as_str()).unwrap().into_owned();
            prop_assert_eq!(extract_digits(shown.as_str()).unwrap().into_owned(), canonical);
        }
    }
}
