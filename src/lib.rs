//! # Effect Registrar
//!
//! A configuration-schema registrar for addressable-LED effects. For each
//! supported effect kind it declares the accepted configuration keys (with
//! defaults, type coercion, and bounds) and translates a validated parameter
//! block into an ordered sequence of setter calls against a named,
//! externally-owned effect instance.
//!
//! The crate performs no rendering of its own: no pixel math, no timing, no
//! color algorithms. Its entire job is validate-and-translate, leaving the
//! host free to apply the resulting plan however it likes.
//!
//! ## Quick Start
//!
//! ```rust
//! use effect_registrar::{EffectParams, EffectRegistry};
//!
//! let registry = EffectRegistry::new();
//! let params = EffectParams::new().set("twinkle_speed", 6i64);
//!
//! let plan = registry
//!     .translate("addressable_twinklefox", Some("Tree"), &params)
//!     .unwrap();
//! for call in &plan.calls {
//!     println!("{}.{}({})", plan.instance, call.setter, call.value);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`effects`] - Effect schemas, the registry, and the setter-call plan types
//! - [`schema`] - Shared type-coercion helpers (percentage, uint8, bounds)
//! - [`color`] - 8-bit color records built from percentage channels
//! - [`palette`] - The closed set of twinkle palettes
//! - [`config`] - Declarations-file loading and batch translation
//!
//! ## Adding Custom Effects
//!
//! Implement the [`EffectSchema`](effects::EffectSchema) trait and register
//! it with [`EffectRegistry::register`](effects::EffectRegistry::register):
//!
//! ```rust
//! use effect_registrar::effects::{EffectParams, EffectPlan, EffectSchema, SetterCall};
//! use effect_registrar::Result;
//!
//! struct SolidEffect;
//!
//! impl EffectSchema for SolidEffect {
//!     fn kind(&self) -> &'static str {
//!         "addressable_solid"
//!     }
//!
//!     fn label(&self) -> &'static str {
//!         "Solid"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "A single solid color"
//!     }
//!
//!     fn parameters(&self) -> Vec<(&'static str, &'static str)> {
//!         vec![]
//!     }
//!
//!     fn translate(&self, _params: &EffectParams, instance: &str) -> Result<EffectPlan> {
//!         Ok(EffectPlan {
//!             kind: self.kind(),
//!             instance: instance.to_string(),
//!             calls: vec![],
//!         })
//!     }
//! }
//! ```

pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod palette;
pub mod schema;

// Re-export commonly used types for convenience
pub use crate::{
    config::EffectsConfig,
    effects::{EffectParams, EffectPlan, EffectRegistry, EffectSchema, SetterCall, SetterValue},
    error::{RegistrarError, Result, SchemaError},
    palette::TwinklePalette,
};
