//! Tag domain constants and validation.

use crate::error::CoreError;

/// Default tag color (blue).
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Maximum tag name length.
pub const MAX_NAME_LEN: usize = 50;

/// Validate a tag name: non-empty after trimming, within length limits.
///
/// Returns the trimmed name so callers persist the normalized form.
pub fn validate_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Tag name must not be empty or whitespace-only".into(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Tag name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a hex color code of the form `#rgb` or `#rrggbb`.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    let valid = color.strip_prefix('#').is_some_and(|hex| {
        (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{color}': expected a hex code like #3b82f6"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name(" Comedy ").unwrap(), "Comedy");
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_name("  ").is_err());
    }

    #[test]
    fn overlong_name_rejected() {
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn hex_colors_accepted() {
        assert!(validate_color("#3b82f6").is_ok());
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#FF0000").is_ok());
    }

    #[test]
    fn malformed_colors_rejected() {
        assert!(validate_color("3b82f6").is_err());
        assert!(validate_color("#3b82f").is_err());
        assert!(validate_color("#gggggg").is_err());
        assert!(validate_color("blue").is_err());
    }
}
