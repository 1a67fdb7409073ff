//! Output formatting utilities.

use belgian_localflavor::Choice;

use crate::commands::nrn::CheckResult;

/// Formats a check result as a table row.
pub fn format_check_row(result: &CheckResult) -> String {
    let verdict = if result.valid { "valid" } else { "invalid" };
    let detail = result
        .display
        .as_deref()
        .or(result.error.as_deref())
        .unwrap_or("");

    format!(
        "{:<24} {:<8} {}",
        truncate(&result.input, 24),
        verdict,
        detail
    )
}

/// Prints the check table header.
#[allow(clippy::print_literal)]
pub fn print_check_header() {
    println!("{:<24} {:<8} {}", "INPUT", "VERDICT", "DETAIL");
    println!("{}", "-".repeat(72));
}

/// Formats a choice as `CODE  Label`.
pub fn format_choice_row(choice: &Choice) -> String {
    format!("{:<5} {}", choice.code, choice.label)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_inputs_are_truncated() {
        assert_eq!(truncate("85.07.30-033.28", 24), "85.07.30-033.28");
        assert_eq!(truncate(&"9".repeat(30), 10), "9999999...");
    }

    #[test]
    fn check_row_shows_display_or_error() {
        let ok = CheckResult {
            input: "85073003328".into(),
            valid: true,
            display: Some("85.07.30-033.28".into()),
            error: None,
        };
        assert!(format_check_row(&ok).ends_with("valid    85.07.30-033.28"));

        let bad = CheckResult {
            input: "123".into(),
            valid: false,
            display: None,
            error: Some("nope".into()),
        };
        assert!(format_check_row(&bad).contains("invalid  nope"));
    }
}
