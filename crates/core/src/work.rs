//! Work domain constants and validation.
//!
//! A work is a tracked media item. Its `type` and `status` columns are
//! enum-like strings constrained to the fixed value sets below, and the
//! reminder fields obey a required-if-enabled rule.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Work type constants
// ---------------------------------------------------------------------------

pub const TYPE_ANIMATION: &str = "animation";
pub const TYPE_NOVEL: &str = "novel";
pub const TYPE_COMIC: &str = "comic";
pub const TYPE_FILM: &str = "film";
pub const TYPE_SERIES: &str = "series";
pub const TYPE_CUSTOM: &str = "custom";

/// All valid work types.
pub const VALID_WORK_TYPES: &[&str] = &[
    TYPE_ANIMATION,
    TYPE_NOVEL,
    TYPE_COMIC,
    TYPE_FILM,
    TYPE_SERIES,
    TYPE_CUSTOM,
];

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_PAUSED: &str = "paused";
pub const STATUS_DROPPED: &str = "dropped";

/// All valid work statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_PAUSED,
    STATUS_DROPPED,
];

// ---------------------------------------------------------------------------
// Reminder frequency constants
// ---------------------------------------------------------------------------

pub const FREQUENCY_DAILY: &str = "daily";
pub const FREQUENCY_WEEKLY: &str = "weekly";
pub const FREQUENCY_MONTHLY: &str = "monthly";

/// All valid reminder frequencies.
pub const VALID_FREQUENCIES: &[&str] = &[FREQUENCY_DAILY, FREQUENCY_WEEKLY, FREQUENCY_MONTHLY];

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum title length.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum review and note length.
pub const MAX_TEXT_LEN: usize = 1000;
/// Maximum source length.
pub const MAX_SOURCE_LEN: usize = 200;
/// Inclusive year bounds.
pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2030;
/// Inclusive rating bounds (stars).
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a work title: non-empty after trimming, within length limits.
///
/// Returns the trimmed title so callers persist the normalized form.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty or whitespace-only".into(),
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that a work type string is one of the known types.
pub fn validate_work_type(work_type: &str) -> Result<(), CoreError> {
    if VALID_WORK_TYPES.contains(&work_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown work type: '{work_type}'. Valid types: {}",
            VALID_WORK_TYPES.join(", ")
        )))
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown status: '{status}'. Valid statuses: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate that a year is within the accepted range.
pub fn validate_year(year: i64) -> Result<(), CoreError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Year must be between {MIN_YEAR} and {MAX_YEAR}"
        )))
    }
}

/// Validate that a rating is within the 1-5 star range.
pub fn validate_rating(rating: i64) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )))
    }
}

/// Validate an optional free-text field against a length limit.
pub fn validate_text_len(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), CoreError> {
    if value.chars().count() > max_len {
        Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )))
    } else {
        Ok(())
    }
}

/// Validate the reminder rule: a frequency is required when reminders are
/// enabled, and any supplied frequency must be one of the known values.
pub fn validate_reminder(enabled: bool, frequency: Option<&str>) -> Result<(), CoreError> {
    if let Some(freq) = frequency {
        if !VALID_FREQUENCIES.contains(&freq) {
            return Err(CoreError::Validation(format!(
                "Unknown reminder frequency: '{freq}'. Valid frequencies: {}",
                VALID_FREQUENCIES.join(", ")
            )));
        }
    }
    if enabled && frequency.is_none() {
        return Err(CoreError::Validation(
            "Reminder frequency is required when reminders are enabled".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
