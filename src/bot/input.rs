//! Data-entry checks applied before anything reaches the stores.

use crate::errors::{Error, Result};

/// Trimmed text, or `None` if nothing but whitespace was entered.
#[must_use]
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed text, rejected as [`Error::InvalidInput`] when blank.
///
/// # Errors
/// Returns `Error::InvalidInput` naming `field` if only whitespace was entered.
pub fn required(value: &str, field: &str) -> Result<String> {
    non_empty(value).ok_or_else(|| Error::InvalidInput {
        message: format!("{field} cannot be empty."),
    })
}

/// [`required`] for an optional edit; an omitted value stays `None`.
///
/// # Errors
/// Returns `Error::InvalidInput` if a value was given but is blank.
pub fn optional(value: Option<&str>, field: &str) -> Result<Option<String>> {
    value.map(|v| required(v, field)).transpose()
}

/// Reply used when a disc, cash entry, or tag reference does not resolve.
#[must_use]
pub fn not_found(kind: &str, reference: &str) -> String {
    format!("❌ Could not find a {kind} matching '{reference}'. Pick one from the suggestions.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Destroyer "), Some("Destroyer".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn test_required_rejects_blank_as_invalid_input() {
        assert_eq!(required(" Champion ", "Plastic").ok(), Some("Champion".to_string()));

        let err = required("  ", "Memo").err();
        assert!(matches!(err, Some(Error::InvalidInput { .. })));
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("Invalid input: Memo cannot be empty.".to_string())
        );
    }

    #[test]
    fn test_optional_keeps_omitted_values() {
        assert!(matches!(optional(None, "Disc name"), Ok(None)));
        assert!(matches!(optional(Some(" Buzzz"), "Disc name"), Ok(Some(ref n)) if n == "Buzzz"));
        assert!(matches!(
            optional(Some(""), "Disc name"),
            Err(Error::InvalidInput { .. })
        ));
    }
}
