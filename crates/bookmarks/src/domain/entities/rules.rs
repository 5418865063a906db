//! Field rules shared by the entity input types

use crate::domain::errors::DomainError;

pub const TITLE_MAX: usize = 255;
pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 500;
pub const URL_MAX: usize = 2048;

/// Rejects blank values and values longer than `max` characters
pub(crate) fn required(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    max_len(field, value, max)
}

pub(crate) fn optional(field: &str, value: Option<&str>, max: usize) -> Result<(), DomainError> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

fn max_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must not exceed {max} characters"
        )));
    }
    Ok(())
}
