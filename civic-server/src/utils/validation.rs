//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::utils::AppError;

/// Complaint free-text description
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Chat prompt forwarded to the inference API
pub const MAX_PROMPT_LEN: usize = 4000;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(validate_required_text("", "description", 10).is_err());
        assert!(validate_required_text("   ", "description", 10).is_err());
    }

    #[test]
    fn test_rejects_over_limit() {
        let long = "x".repeat(11);
        assert!(validate_required_text(&long, "description", 10).is_err());
    }

    #[test]
    fn test_accepts_valid_text() {
        assert!(validate_required_text("Large hole on Main St", "description", 100).is_ok());
    }
}
