use crate::utils::error::{Result, SumlogError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(SumlogError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

/// Checks a parsed operand, reporting `raw` (the text as typed) on failure.
pub fn validate_finite(field_name: &str, raw: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    Err(SumlogError::InvalidOperandError {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason: "Value must be finite".to_string(),
    })
}
