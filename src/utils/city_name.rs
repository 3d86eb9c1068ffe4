//! Validation of caller-supplied place names.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Letters from any script and spaces, nothing else.
static PLACE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L} ]+$").unwrap());

/// Returns true when `name` is non-empty and made only of letters and spaces.
pub fn is_valid_place_name(name: &str) -> bool {
    PLACE_NAME_REGEX.is_match(name)
}

/// Validates every entry, rejecting on the first offending one.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the offending entry.
pub fn validate_city_names(names: &[String]) -> Result<(), AppError> {
    if let Some(bad) = names.iter().find(|name| !is_valid_place_name(name)) {
        return Err(AppError::bad_request(
            format!("'{bad}' contains invalid characters. Only letters and spaces are allowed."),
            json!({ "city": bad }),
        ));
    }
    Ok(())
}

/// Validates a region name used to address persisted results.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for names that are not letters and spaces.
pub fn validate_region_name(region: &str) -> Result<(), AppError> {
    if is_valid_place_name(region) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            format!("'{region}' is not a valid region name"),
            json!({ "region": region }),
        ))
    }
}
