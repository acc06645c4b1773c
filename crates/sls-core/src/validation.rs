//! Required-field checks shared by every form.
//!
//! A value counts as present when it is non-empty after trimming. Checks run
//! before any record is built, so a rejected submission never reaches the
//! store.

use crate::errors::CoreError;

/// Labels of the fields whose values are blank.
#[must_use]
pub fn missing_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

/// Reject the submission with `message` if any field is blank.
///
/// # Errors
///
/// Returns `CoreError::Validation` carrying `message` when a field is missing.
pub fn require_all(fields: &[(&str, &str)], message: &str) -> Result<(), CoreError> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("\t\n", true)]
    #[case("P-01", false)]
    #[case("  P-01 ", false)]
    fn blank_detection(#[case] value: &str, #[case] missing: bool) {
        let labels = missing_fields(&[("Project Code", value)]);
        assert_eq!(labels.is_empty(), !missing);
    }

    #[test]
    fn reports_every_missing_label() {
        let labels = missing_fields(&[("Session Name", ""), ("Session Code", "S1"), ("Other", " ")]);
        assert_eq!(labels, vec!["Session Name", "Other"]);
    }

    #[test]
    fn require_all_carries_page_message() {
        let err = require_all(
            &[("Project Name", "Youth"), ("Project Code", "")],
            "Fill in both Project Name and Project Code.",
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Fill in both Project Name and Project Code.");
    }

    #[test]
    fn require_all_passes_when_present() {
        assert!(require_all(&[("Participant Name", "Sam")], "Participant name required.").is_ok());
    }
}
