//! Field checks shared by request payloads

use crate::utils::error::{ClientError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static regex")
});

pub(crate) fn check_email(field: &str, value: &str) -> Result<()> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ClientError::validation(format!(
            "{} is not a valid email address",
            field
        )))
    }
}

/// Character count in `min..=max`
pub(crate) fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ClientError::validation(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

pub(crate) fn check_min_len(field: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(ClientError::validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

/// `0 < value <= max`
pub(crate) fn check_positive_max(field: &str, value: f64, max: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 || value > max {
        return Err(ClientError::validation(format!(
            "{} must be greater than 0 and at most {}",
            field, max
        )));
    }
    Ok(())
}

pub(crate) fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ClientError::validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(())
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ClientError::validation(format!(
            "{} must not be negative",
            field
        )));
    }
    Ok(())
}

/// Inclusive integer range
pub(crate) fn check_range<T>(field: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ClientError::validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}
