use thiserror::Error;

/// Main error type for the effect registrar library
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors raised while checking an effect's parameter block
///
/// Every variant names the offending key path so the user can find the bad
/// line in their configuration without guessing.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("invalid type for '{key}': expected {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("value for '{key}' out of range: {value} is not in [{min}, {max}]")]
    OutOfRange {
        key: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("unrecognized value for '{key}': '{value}' (allowed: {allowed})")]
    UnknownValue {
        key: String,
        value: String,
        allowed: String,
    },

    #[error("unknown parameter '{key}' (allowed: {allowed})")]
    UnknownKey { key: String, allowed: String },

    #[error("unknown effect kind '{kind}' (available: {available})")]
    UnknownEffect { kind: String, available: String },
}

/// Configuration-file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file {path}: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to serialize configuration: {reason}")]
    SerializeFailed { reason: String },
}

/// Convenience type alias for Results using RegistrarError
pub type Result<T> = std::result::Result<T, RegistrarError>;

impl SchemaError {
    /// Prefix the key path of this error with a parent key, turning `red`
    /// into `color.red` when the failure happened inside a sub-record.
    pub fn nested_under(self, parent: &str) -> Self {
        let join = |key: String| format!("{parent}.{key}");
        match self {
            Self::TypeMismatch {
                key,
                expected,
                found,
            } => Self::TypeMismatch {
                key: join(key),
                expected,
                found,
            },
            Self::OutOfRange {
                key,
                value,
                min,
                max,
            } => Self::OutOfRange {
                key: join(key),
                value,
                min,
                max,
            },
            Self::UnknownValue {
                key,
                value,
                allowed,
            } => Self::UnknownValue {
                key: join(key),
                value,
                allowed,
            },
            Self::UnknownKey { key, allowed } => Self::UnknownKey {
                key: join(key),
                allowed,
            },
            other => other,
        }
    }
}
