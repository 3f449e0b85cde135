//! Shared type-coercion helpers applied against an effect's parameter block.
//!
//! Each helper looks up one key, substitutes the declared default when the
//! key is absent, and coerces whatever the user wrote into the declared
//! parameter type. Defaults and live input go through the same coercion, so
//! a default that would not validate cannot exist by construction.

use crate::effects::traits::{EffectParams, ParamValue};
use crate::error::SchemaError;

type Result<T> = std::result::Result<T, SchemaError>;

/// A percentage value held as a fraction in [0.0, 1.0]
///
/// Accepted input forms are a bare number in [0, 1] or a string like `"25%"`.
/// The fraction is rescaled to an 8-bit channel value only at translation
/// time, never during validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);

    /// Wrap an already-validated fraction; callers guarantee [0.0, 1.0]
    pub const fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// The 0-100 form of this percentage
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Rescale to an 8-bit channel value via round(fraction * 255)
    pub fn channel(&self) -> u8 {
        (self.0 * 255.0).round() as u8
    }
}

/// Coerce a percentage parameter, defaulting when the key is absent
pub fn percentage(params: &EffectParams, key: &str, default: Percentage) -> Result<Percentage> {
    let Some(value) = params.get(key) else {
        return Ok(default);
    };

    match value {
        ParamValue::Integer(_) | ParamValue::Float(_) => {
            // Bare numbers are fractions: 0.25 means 25%
            let fraction = value.as_f64().unwrap_or_default();
            if !(0.0..=1.0).contains(&fraction) {
                return Err(SchemaError::OutOfRange {
                    key: key.to_string(),
                    value: fraction.to_string(),
                    min: "0.0".to_string(),
                    max: "1.0".to_string(),
                });
            }
            Ok(Percentage(fraction))
        }
        ParamValue::String(s) => {
            let Some(number) = s.trim().strip_suffix('%') else {
                return Err(SchemaError::TypeMismatch {
                    key: key.to_string(),
                    expected: "percentage (number in [0, 1] or 'NN%' string)",
                    found: format!("string '{s}'"),
                });
            };
            let percent: f64 = number.trim().parse().map_err(|_| SchemaError::TypeMismatch {
                key: key.to_string(),
                expected: "percentage (number in [0, 1] or 'NN%' string)",
                found: format!("string '{s}'"),
            })?;
            if !(0.0..=100.0).contains(&percent) {
                return Err(SchemaError::OutOfRange {
                    key: key.to_string(),
                    value: format!("{percent}%"),
                    min: "0%".to_string(),
                    max: "100%".to_string(),
                });
            }
            Ok(Percentage(percent / 100.0))
        }
        other => Err(SchemaError::TypeMismatch {
            key: key.to_string(),
            expected: "percentage (number in [0, 1] or 'NN%' string)",
            found: other.type_name().to_string(),
        }),
    }
}

/// Coerce an 8-bit unsigned integer parameter
///
/// Numeric strings go through the same parser as integers, so `"1"` and `1`
/// are interchangeable.
pub fn uint8(params: &EffectParams, key: &str, default: u8) -> Result<u8> {
    let value = int_range(params, key, 0, 255, i64::from(default))?;
    Ok(value as u8)
}

/// Coerce an integer parameter bounded to [min, max] inclusive
pub fn int_range(params: &EffectParams, key: &str, min: i64, max: i64, default: i64) -> Result<i64> {
    let Some(value) = params.get(key) else {
        return Ok(default);
    };

    let parsed = match value {
        ParamValue::Integer(i) => *i,
        ParamValue::String(s) => s.trim().parse().map_err(|_| SchemaError::TypeMismatch {
            key: key.to_string(),
            expected: "integer",
            found: format!("string '{s}'"),
        })?,
        other => {
            return Err(SchemaError::TypeMismatch {
                key: key.to_string(),
                expected: "integer",
                found: other.type_name().to_string(),
            })
        }
    };

    if !(min..=max).contains(&parsed) {
        return Err(SchemaError::OutOfRange {
            key: key.to_string(),
            value: parsed.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(parsed)
}

/// Coerce a boolean parameter, accepting the usual on/off spellings
pub fn boolean(params: &EffectParams, key: &str, default: bool) -> Result<bool> {
    let Some(value) = params.get(key) else {
        return Ok(default);
    };

    match value {
        ParamValue::Bool(b) => Ok(*b),
        ParamValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "enable" => Ok(true),
            "false" | "no" | "off" | "disable" => Ok(false),
            _ => Err(SchemaError::TypeMismatch {
                key: key.to_string(),
                expected: "boolean",
                found: format!("string '{s}'"),
            }),
        },
        other => Err(SchemaError::TypeMismatch {
            key: key.to_string(),
            expected: "boolean",
            found: other.type_name().to_string(),
        }),
    }
}

/// Reject any parameter key the schema does not declare
pub fn reject_unknown_keys(params: &EffectParams, allowed: &[&str]) -> Result<()> {
    for key in params.keys() {
        if !allowed.contains(&key) {
            return Err(SchemaError::UnknownKey {
                key: key.to_string(),
                allowed: allowed.join(", "),
            });
        }
    }
    Ok(())
}
