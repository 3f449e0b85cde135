use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{
    color::{ColorRgb, ColorRgbw},
    error::{Result, SchemaError},
    palette::TwinklePalette,
};

/// Core trait that every registered effect schema must implement
///
/// A schema owns the accepted-key surface for one effect kind and the
/// translation of a validated parameter block into setter calls. Schemas are
/// stateless; all per-declaration data arrives through `translate`.
pub trait EffectSchema: Send + Sync {
    /// Unique kind identifier used in configuration files
    fn kind(&self) -> &'static str;

    /// Default display name for instances of this effect
    fn label(&self) -> &'static str;

    /// Human-readable description of what the effect looks like
    fn description(&self) -> &str;

    /// Accepted parameter keys with a short description of each
    ///
    /// Used for discovery and error messages; the authoritative validation
    /// happens inside `translate`.
    fn parameters(&self) -> Vec<(&'static str, &'static str)>;

    /// Validate `params` and produce the setter-call plan for one instance
    ///
    /// Validation runs to completion before any call is recorded, so a
    /// failing parameter block emits nothing.
    fn translate(&self, params: &EffectParams, instance: &str) -> Result<EffectPlan>;
}

/// Flexible configuration value as it arrives from a configuration file
///
/// Coercion into the declared parameter types happens later, against the
/// effect's schema; this type only preserves what the user wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            ParamValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, ParamValue>> {
        match self {
            ParamValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Name of the value's shape, for type-mismatch error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "boolean",
            ParamValue::Integer(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::String(_) => "string",
            ParamValue::Map(_) => "map",
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

/// One effect declaration's parameter block, keyed by configuration key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectParams(BTreeMap<String, ParamValue>);

impl EffectParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter value (builder style)
    pub fn set<K: Into<String>, V: Into<ParamValue>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extract a nested parameter block, e.g. a color sub-record
    ///
    /// A missing key yields an empty block so every nested field falls back
    /// to its declared default.
    pub fn sub_record(&self, key: &str) -> std::result::Result<EffectParams, SchemaError> {
        match self.0.get(key) {
            None => Ok(EffectParams::new()),
            Some(ParamValue::Map(m)) => Ok(EffectParams(m.clone())),
            Some(other) => Err(SchemaError::TypeMismatch {
                key: key.to_string(),
                expected: "map",
                found: other.type_name().to_string(),
            }),
        }
    }
}

impl From<BTreeMap<String, ParamValue>> for EffectParams {
    fn from(map: BTreeMap<String, ParamValue>) -> Self {
        Self(map)
    }
}

/// Typed value carried by a single setter call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetterValue {
    /// Raw percentage in the 0-100 form, not rescaled to a channel value
    Percent(f64),
    UInt(u8),
    Bool(bool),
    Palette(TwinklePalette),
    Rgb(ColorRgb),
    Rgbw(ColorRgbw),
}

impl fmt::Display for SetterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetterValue::Percent(p) => write!(f, "{p}%"),
            SetterValue::UInt(v) => write!(f, "{v}"),
            SetterValue::Bool(b) => write!(f, "{b}"),
            SetterValue::Palette(p) => write!(f, "{p}"),
            SetterValue::Rgb(c) => write!(f, "{c}"),
            SetterValue::Rgbw(c) => write!(f, "{c}"),
        }
    }
}

impl From<u8> for SetterValue {
    fn from(value: u8) -> Self {
        SetterValue::UInt(value)
    }
}

impl From<bool> for SetterValue {
    fn from(value: bool) -> Self {
        SetterValue::Bool(value)
    }
}

impl From<TwinklePalette> for SetterValue {
    fn from(value: TwinklePalette) -> Self {
        SetterValue::Palette(value)
    }
}

impl From<ColorRgb> for SetterValue {
    fn from(value: ColorRgb) -> Self {
        SetterValue::Rgb(value)
    }
}

impl From<ColorRgbw> for SetterValue {
    fn from(value: ColorRgbw) -> Self {
        SetterValue::Rgbw(value)
    }
}

/// One parameter-setting directive against an effect instance
#[derive(Debug, Clone, PartialEq)]
pub struct SetterCall {
    /// Setter name on the downstream effect class
    pub setter: &'static str,
    pub value: SetterValue,
}

impl SetterCall {
    pub fn new<V: Into<SetterValue>>(setter: &'static str, value: V) -> Self {
        Self {
            setter,
            value: value.into(),
        }
    }
}

/// Ordered setter-call sequence for one declared effect
///
/// This is the registrar's entire output for a declaration: the host applies
/// the calls however it likes (direct method calls, code generation, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct EffectPlan {
    /// Effect kind identifier the plan was produced for
    pub kind: &'static str,

    /// Display name of the instance the calls target
    pub instance: String,

    /// Setter calls in emission order
    pub calls: Vec<SetterCall>,
}

impl fmt::Display for EffectPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, call) in self.calls.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}.{}({})", self.instance, call.setter, call.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_accessors() {
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParamValue::Integer(7).as_i64(), Some(7));
        assert_eq!(ParamValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(ParamValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(ParamValue::String("x".to_string()).as_str(), Some("x"));
        assert_eq!(ParamValue::Float(0.5).as_bool(), None);
    }

    #[test]
    fn test_params_builder_and_lookup() {
        let params = EffectParams::new()
            .set("bit_size", 3i64)
            .set("label", "candy cane");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("bit_size").and_then(ParamValue::as_i64), Some(3));
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn test_sub_record_of_missing_key_is_empty() {
        let params = EffectParams::new();
        let sub = params.sub_record("color").unwrap();
        assert!(sub.is_empty());
    }

    #[test]
    fn test_sub_record_rejects_scalar() {
        let params = EffectParams::new().set("color", "red");
        assert!(params.sub_record("color").is_err());
    }

    #[test]
    fn test_plan_display_names_instance_and_setters() {
        let plan = EffectPlan {
            kind: "addressable_christmas",
            instance: "Porch".to_string(),
            calls: vec![
                SetterCall::new("set_bit_size", 2u8),
                SetterCall::new("set_blank_size", 1u8),
            ],
        };

        let rendered = plan.to_string();
        assert_eq!(rendered, "Porch.set_bit_size(2)\nPorch.set_blank_size(1)");
    }
}
