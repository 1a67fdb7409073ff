use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::nrn::{self, INVALID_NRN_MESSAGE};
use crate::postal_code::{PostalCode, INVALID_POSTAL_CODE_MESSAGE};
use crate::raw::RawValue;
use crate::validation::ValidationError;

/// Default message for a missing required value.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Per-field options.
///
/// Deserializes from e.g. `{"required": false, "error_messages": {"invalid": "..."}}`;
/// missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Reject empty-equivalent values.
    pub required: bool,
    /// Message overrides keyed by error code (`required`, `invalid`).
    pub error_messages: BTreeMap<String, String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            required: true,
            error_messages: BTreeMap::new(),
        }
    }
}

impl FieldConfig {
    /// Config for a field that accepts empty values.
    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::default()
        }
    }

    /// Overrides the message for `code`.
    pub fn with_message(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.error_messages.insert(code.into(), message.into());
        self
    }

    /// Message for `code`, falling back to `default`.
    pub fn message(&self, code: &str, default: &str) -> String {
        self.error_messages
            .get(code)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Applies the required check to the trimmed value.
    ///
    /// Returns the untrimmed text, or `None` when the value is
    /// empty-equivalent and the field is optional. Whitespace-only text
    /// fails a required field but is handed back to an optional one.
    fn check_required<'a>(&self, value: RawValue<'a>) -> Result<Option<&'a str>, ValidationError> {
        let blank = value.text().map_or(true, |s| s.trim().is_empty());
        if blank && self.required {
            return Err(ValidationError::Required {
                message: self.message("required", REQUIRED_MESSAGE),
            });
        }
        Ok(value.text())
    }
}

/// A form field: turns raw input into a cleaned value or a validation error.
pub trait Field {
    /// Cleaned value type.
    type Output;

    /// Options this field was built with.
    fn config(&self) -> &FieldConfig;

    /// Validates and normalizes a submitted value.
    fn clean(&self, value: RawValue<'_>) -> Result<Self::Output, ValidationError>;

    /// Formats a stored value for redisplay.
    fn prepare_value(&self, value: RawValue<'_>) -> String;
}

/// National Register Number field, cleaned to `00.00.00-000.00`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NationalRegisterNumberField {
    config: FieldConfig,
}

impl NationalRegisterNumberField {
    /// Creates the field with `config`.
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }
}

impl Field for NationalRegisterNumberField {
    type Output = String;

    fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Returns the display form, or an empty string for an allowed empty value.
    fn clean(&self, value: RawValue<'_>) -> Result<String, ValidationError> {
        let Some(text) = self.config.check_required(value)? else {
            return Ok(String::new());
        };
        if !nrn::is_valid(text) {
            // Never log the number itself.
            debug!(len = text.len(), "rejected national register number");
            return Err(ValidationError::InvalidNrn {
                message: self.config.message("invalid", INVALID_NRN_MESSAGE),
            });
        }
        Ok(nrn::to_display_form(text)
            .map(Cow::into_owned)
            .unwrap_or_default())
    }

    fn prepare_value(&self, value: RawValue<'_>) -> String {
        nrn::to_display_form(value)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }
}

/// Belgian postal code field (`1XXX` to `9XXX`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalCodeField {
    config: FieldConfig,
}

impl PostalCodeField {
    /// Creates the field with `config`.
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }
}

impl Field for PostalCodeField {
    type Output = Option<PostalCode>;

    fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn clean(&self, value: RawValue<'_>) -> Result<Option<PostalCode>, ValidationError> {
        let Some(text) = self.config.check_required(value)? else {
            return Ok(None);
        };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        match PostalCode::parse(text) {
            Ok(code) => Ok(Some(code)),
            Err(_) => {
                debug!(len = text.len(), "rejected postal code");
                Err(ValidationError::InvalidPostalCode {
                    message: self.config.message("invalid", INVALID_POSTAL_CODE_MESSAGE),
                })
            }
        }
    }

    fn prepare_value(&self, value: RawValue<'_>) -> String {
        value.text().map(str::trim).unwrap_or_default().to_string()
    }
}
