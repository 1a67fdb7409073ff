//! Belgian form helpers: postal codes, province and region choice lists,
//! and National Register Number (NRN) validation.
//!
//! The NRN routines in [`nrn`] are pure functions over strings. The field
//! types in [`fields`] wrap them into the clean/prepare contract a form
//! layer expects, and [`widgets`] exposes the static choice tables as
//! select widgets. Nothing here renders markup or keeps state.
//!
#![deny(missing_docs)]

/// Static province and region tables.
pub mod choices;
/// Form fields with clean/prepare semantics.
pub mod fields;
/// National Register Number extraction, checksum and formatting.
pub mod nrn;
/// Validated postal code newtype.
pub mod postal_code;
/// Raw field input, including the "no value" sentinel.
pub mod raw;
/// Validation errors raised by fields and parsers.
pub mod validation;
/// Select widgets backed by the choice tables.
pub mod widgets;

pub use choices::{Choice, PROVINCE_CHOICES, REGION_CHOICES};
pub use fields::{Field, FieldConfig, NationalRegisterNumberField, PostalCodeField};
pub use nrn::{extract_digits, format_as_typed, is_valid, to_display_form, Nrn, Sex};
pub use postal_code::PostalCode;
pub use raw::RawValue;
pub use validation::ValidationError;
pub use widgets::{ProvinceSelect, RegionSelect, Select};
