//! # Effect Schema System
//!
//! Each supported effect kind declares its accepted configuration keys
//! (defaults, coercion, bounds) and how a validated parameter block turns
//! into an ordered sequence of setter calls on a named effect instance.
//!
//! ## Built-in effects
//!
//! - **Stars** (`addressable_stars`): random pixels igniting in a fixed color
//! - **Christmas** (`addressable_christmas`): alternating red/green pixel runs
//! - **TwinkleFox** (`addressable_twinklefox`): palette-driven twinkles over a
//!   background color
//!
//! ## Usage
//!
//! ```rust
//! use effect_registrar::effects::{EffectParams, EffectRegistry};
//!
//! let registry = EffectRegistry::new();
//! let params = EffectParams::new().set("probability", "25%");
//! let plan = registry.translate("addressable_stars", None, &params).unwrap();
//! assert_eq!(plan.calls.len(), 2);
//! ```

pub mod registry;
pub mod traits;

// Effect schema implementations
pub mod christmas;
pub mod stars;
pub mod twinklefox;

// Re-exports for convenience
pub use registry::EffectRegistry;
pub use traits::{EffectParams, EffectPlan, EffectSchema, ParamValue, SetterCall, SetterValue};

pub use christmas::ChristmasEffect;
pub use stars::StarsEffect;
pub use twinklefox::TwinkleFoxEffect;
