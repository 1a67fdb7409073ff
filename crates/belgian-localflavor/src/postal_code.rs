use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::choices::{self, Choice, PROVINCE_CHOICES};
use crate::validation::ValidationError;

/// Default message for a value that is not a postal code.
pub const INVALID_POSTAL_CODE_MESSAGE: &str =
    "Enter a valid postal code in the range and format 1XXX - 9XXX.";

const PATTERN: &str = r"^[1-9][0-9]{3}$";

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PATTERN).expect("invalid regex"))
}

/// Belgian postal code, four digits in `1000..=9999` (pattern: `^[1-9][0-9]{3}$`).
///
/// The first digit mostly identifies the province. 1xxx is shared by the
/// Brussels Capital Region, western Flemish Brabant and Walloon Brabant,
/// and 3xxx by eastern Flemish Brabant and Limburg.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parses a postal code; surrounding whitespace is ignored.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = value.as_ref().trim();
        if !pattern().is_match(s) {
            return Err(ValidationError::InvalidPostalCode {
                message: INVALID_POSTAL_CODE_MESSAGE.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Numeric value of the code.
    pub fn number(&self) -> u16 {
        self.0
            .bytes()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// Province code (see [`PROVINCE_CHOICES`]) serving this postal code.
    pub fn province_code(&self) -> &'static str {
        match self.number() {
            1000..=1299 => "BRU",
            1300..=1499 => "WBR",
            1500..=1999 | 3000..=3499 => "VBR",
            2000..=2999 => "VAN",
            3500..=3999 => "VLI",
            4000..=4999 => "WLG",
            5000..=5999 => "WNA",
            6000..=6599 | 7000..=7999 => "WHT",
            6600..=6999 => "WLX",
            8000..=8999 => "VWV",
            _ => "VOV",
        }
    }

    /// Province choice serving this postal code.
    pub fn province(&self) -> Option<&'static Choice> {
        choices::find(PROVINCE_CHOICES, self.province_code())
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
