use std::collections::HashMap;

use crate::{
    effects::{ChristmasEffect, EffectParams, EffectPlan, EffectSchema, StarsEffect, TwinkleFoxEffect},
    error::{Result, SchemaError},
};

/// Registry mapping effect-kind identifiers to their schemas
///
/// The table is populated once at construction and read-only afterwards;
/// translation never mutates it, so declarations can be processed in any
/// order (or in parallel, if a host ever cared to).
pub struct EffectRegistry {
    effects: HashMap<String, Box<dyn EffectSchema>>,
}

impl EffectRegistry {
    /// Create a registry with all built-in effect schemas
    pub fn new() -> Self {
        let mut registry = Self {
            effects: HashMap::new(),
        };

        registry.register(Box::new(StarsEffect::new()));
        registry.register(Box::new(ChristmasEffect::new()));
        registry.register(Box::new(TwinkleFoxEffect::new()));
        registry
    }

    /// Register a schema under its own kind identifier
    pub fn register(&mut self, schema: Box<dyn EffectSchema>) {
        self.effects.insert(schema.kind().to_string(), schema);
    }

    /// Look up a schema by kind
    pub fn get(&self, kind: &str) -> Option<&dyn EffectSchema> {
        self.effects.get(kind).map(Box::as_ref)
    }

    /// All registered kind identifiers, sorted
    pub fn available_effects(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.effects.keys().cloned().collect();
        kinds.sort();
        kinds
    }

    pub fn has_effect(&self, kind: &str) -> bool {
        self.effects.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Validate one declaration and produce its setter-call plan
    ///
    /// `instance` overrides the effect's default display name. Fails without
    /// emitting anything if the kind is unknown or the parameters do not
    /// validate.
    pub fn translate(
        &self,
        kind: &str,
        instance: Option<&str>,
        params: &EffectParams,
    ) -> Result<EffectPlan> {
        let schema = self.get(kind).ok_or_else(|| SchemaError::UnknownEffect {
            kind: kind.to_string(),
            available: self.available_effects().join(", "),
        })?;

        let name = instance.unwrap_or_else(|| schema.label());
        schema.translate(params, name)
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
