use crate::utils::error::{Result, SumlogError};
use crate::utils::validation::validate_finite;
use std::ops::Add;

/// Returns `a + b`.
///
/// Overflow behaves as `+` does for `T`.
pub fn sum<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Parses a command-line operand into a finite `f64`.
pub fn parse_operand(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| SumlogError::InvalidOperandError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })?;
    validate_finite(field, raw, value)?;
    tracing::debug!(field, value, "parsed operand");
    Ok(value)
}
