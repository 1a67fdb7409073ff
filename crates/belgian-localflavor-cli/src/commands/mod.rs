//! Subcommand implementations.

use thiserror::Error;

pub mod choices;
pub mod nrn;
pub mod postal_code;

/// Failures that are reported after output has been written.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--strict` was set and some numbers did not validate.
    #[error("{invalid} of {total} national register numbers are invalid")]
    InvalidNumbers {
        /// Number of rejected inputs.
        invalid: usize,
        /// Number of inputs checked.
        total: usize,
    },
}
