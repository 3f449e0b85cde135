use crate::{
    effects::traits::{EffectParams, EffectPlan, EffectSchema, SetterCall},
    error::Result,
    schema,
};

const PARAMETERS: [&str; 2] = ["bit_size", "blank_size"];
const DEFAULT_BIT_SIZE: u8 = 1;
const DEFAULT_BLANK_SIZE: u8 = 0;

/// Schema for the Christmas blink effect
///
/// Alternating red/green runs of `bit_size` pixels, separated by
/// `blank_size` dark pixels.
pub struct ChristmasEffect;

impl ChristmasEffect {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChristmasEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectSchema for ChristmasEffect {
    fn kind(&self) -> &'static str {
        "addressable_christmas"
    }

    fn label(&self) -> &'static str {
        "Christmas"
    }

    fn description(&self) -> &str {
        "Alternating red and green pixel runs with optional dark gaps"
    }

    fn parameters(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("bit_size", "Pixels per colored run (0-255, default 1)"),
            ("blank_size", "Dark pixels between runs (0-255, default 0)"),
        ]
    }

    fn translate(&self, params: &EffectParams, instance: &str) -> Result<EffectPlan> {
        schema::reject_unknown_keys(params, &PARAMETERS)?;

        let bit_size = schema::uint8(params, "bit_size", DEFAULT_BIT_SIZE)?;
        let blank_size = schema::uint8(params, "blank_size", DEFAULT_BLANK_SIZE)?;

        Ok(EffectPlan {
            kind: self.kind(),
            instance: instance.to_string(),
            calls: vec![
                SetterCall::new("set_bit_size", bit_size),
                SetterCall::new("set_blank_size", blank_size),
            ],
        })
    }
}
