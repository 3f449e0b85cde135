use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    effects::{EffectParams, EffectPlan, EffectRegistry},
    error::{ConfigError, Result},
};

/// A file of effect declarations
///
/// Each declaration names an effect kind, an optional instance display name,
/// and the effect's parameter block. The host framework's configuration
/// block maps key-for-key onto this surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Declared effects, in file order
    #[serde(default)]
    pub effects: Vec<EffectDeclaration>,
}

/// One declared effect usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDeclaration {
    /// Effect kind identifier, e.g. `addressable_stars`
    pub kind: String,

    /// Display name for the instance; defaults to the effect's label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Effect parameters as written, validated against the kind's schema
    #[serde(default)]
    pub params: EffectParams,
}

impl EffectsConfig {
    /// Load declarations from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: EffectsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(config)
    }

    /// Save declarations to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed {
            reason: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate and translate every declaration, in file order
    ///
    /// Fails on the first invalid declaration; nothing is emitted for it or
    /// for any declaration after it.
    pub fn translate_all(&self, registry: &EffectRegistry) -> Result<Vec<EffectPlan>> {
        let mut plans = Vec::with_capacity(self.effects.len());
        for declaration in &self.effects {
            debug!("translating {} declaration", declaration.kind);
            plans.push(registry.translate(
                &declaration.kind,
                declaration.name.as_deref(),
                &declaration.params,
            )?);
        }
        Ok(plans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_config() -> EffectsConfig {
        EffectsConfig {
            effects: vec![
                EffectDeclaration {
                    kind: "addressable_stars".to_string(),
                    name: Some("Porch Stars".to_string()),
                    params: EffectParams::new().set("probability", "25%"),
                },
                EffectDeclaration {
                    kind: "addressable_christmas".to_string(),
                    name: None,
                    params: EffectParams::new().set("bit_size", 2i64),
                },
            ],
        }
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("effects.toml");

        let original = sample_config();
        original.save_to_file(&file_path).unwrap();
        let loaded = EffectsConfig::from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = EffectsConfig::from_file("/nonexistent/effects.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_parse_from_toml_text() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("effects.toml");
        std::fs::write(
            &file_path,
            r#"
[[effects]]
kind = "addressable_twinklefox"
name = "Tree"

[effects.params]
twinkle_speed = 6
palette = "Holly_Colors"

[effects.params.color]
red = "10%"
"#,
        )
        .unwrap();

        let config = EffectsConfig::from_file(&file_path).unwrap();
        assert_eq!(config.effects.len(), 1);
        assert_eq!(config.effects[0].kind, "addressable_twinklefox");

        let plans = config.translate_all(&EffectRegistry::new()).unwrap();
        assert_eq!(plans[0].instance, "Tree");
        assert_eq!(plans[0].calls.len(), 6);
    }

    #[test]
    fn test_translate_all_preserves_declaration_order() {
        let config = sample_config();
        let plans = config.translate_all(&EffectRegistry::new()).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].instance, "Porch Stars");
        assert_eq!(plans[1].instance, "Christmas");
    }

    #[test]
    fn test_translate_all_stops_at_first_invalid_declaration() {
        let mut config = sample_config();
        config.effects[0].params = EffectParams::new().set("probability", "150%");

        assert!(config.translate_all(&EffectRegistry::new()).is_err());
    }
}
