//! NRN check and format commands.

use belgian_localflavor::{format_as_typed, to_display_form, Field, NationalRegisterNumberField};
use serde::Serialize;
use std::io::{self, Read};
use tracing::debug;

use super::CliError;
use crate::output;

/// Outcome of checking one input.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn check(
    values: Vec<String>,
    file: Option<String>,
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Arguments win; otherwise one number per line from file or stdin
    let inputs = if !values.is_empty() {
        values
    } else {
        let text = if let Some(path) = file {
            std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read file {}: {}", path, e))?
        } else {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        };
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    };
    debug!(count = inputs.len(), "checking national register numbers");

    let field = NationalRegisterNumberField::default();
    let results: Vec<CheckResult> = inputs
        .into_iter()
        .map(|input| match field.clean(input.as_str().into()) {
            Ok(display) => CheckResult {
                input,
                valid: true,
                display: Some(display),
                error: None,
            },
            Err(e) => CheckResult {
                input,
                valid: false,
                display: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        output::print_check_header();
        for result in &results {
            println!("{}", output::format_check_row(result));
        }
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    if strict && invalid > 0 {
        return Err(CliError::InvalidNumbers {
            invalid,
            total: results.len(),
        }
        .into());
    }

    Ok(())
}

pub fn format(value: String, partial: bool) -> Result<(), Box<dyn std::error::Error>> {
    if partial {
        println!("{}", format_as_typed(&value));
    } else {
        println!("{}", to_display_form(value.as_str()).unwrap_or_default());
    }
    Ok(())
}
