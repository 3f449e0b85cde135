use crate::{
    color,
    effects::traits::{EffectParams, EffectPlan, EffectSchema, SetterCall, SetterValue},
    error::Result,
    schema::{self, Percentage},
};

const PARAMETERS: [&str; 2] = ["probability", "color"];
const DEFAULT_PROBABILITY: Percentage = Percentage::from_fraction(0.10);

/// Schema for the addressable stars effect
///
/// Random single pixels ignite in a fixed color. The ignition probability is
/// handed downstream as a raw percentage; only the color channels are
/// rescaled to 8 bits.
pub struct StarsEffect;

impl StarsEffect {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StarsEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectSchema for StarsEffect {
    fn kind(&self) -> &'static str {
        "addressable_stars"
    }

    fn label(&self) -> &'static str {
        "Stars"
    }

    fn description(&self) -> &str {
        "Random pixels light up as stars in a configurable color"
    }

    fn parameters(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("probability", "Chance of a pixel igniting (0%-100%, default 10%)"),
            ("color", "Star color as red/green/blue/white percentages (default all 0%)"),
        ]
    }

    fn translate(&self, params: &EffectParams, instance: &str) -> Result<EffectPlan> {
        schema::reject_unknown_keys(params, &PARAMETERS)?;

        let probability = schema::percentage(params, "probability", DEFAULT_PROBABILITY)?;
        let star_color = color::rgbw(params, "color")?;

        Ok(EffectPlan {
            kind: self.kind(),
            instance: instance.to_string(),
            calls: vec![
                SetterCall::new(
                    "set_stars_probability",
                    SetterValue::Percent(probability.percent()),
                ),
                SetterCall::new("set_color", star_color),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRgbw;
    use crate::effects::traits::ParamValue;
    use std::collections::BTreeMap;

    fn red_color() -> ParamValue {
        let mut map = BTreeMap::new();
        map.insert("red".to_string(), ParamValue::String("100%".to_string()));
        map.insert("green".to_string(), ParamValue::String("0%".to_string()));
        map.insert("blue".to_string(), ParamValue::String("0%".to_string()));
        ParamValue::Map(map)
    }

    #[test]
    fn test_translate_emits_probability_then_color() {
        let stars = StarsEffect::new();
        let params = EffectParams::new()
            .set("probability", "25%")
            .set("color", red_color());

        let plan = stars.translate(&params, "Stars").unwrap();

        assert_eq!(plan.kind, "addressable_stars");
        assert_eq!(plan.instance, "Stars");
        assert_eq!(
            plan.calls,
            vec![
                SetterCall::new("set_stars_probability", SetterValue::Percent(25.0)),
                SetterCall::new("set_color", ColorRgbw { r: 255, g: 0, b: 0, w: 0 }),
            ]
        );
    }

    #[test]
    fn test_defaults_only() {
        let stars = StarsEffect::new();
        let plan = stars.translate(&EffectParams::new(), "Stars").unwrap();

        assert_eq!(
            plan.calls,
            vec![
                SetterCall::new("set_stars_probability", SetterValue::Percent(10.0)),
                SetterCall::new("set_color", ColorRgbw { r: 0, g: 0, b: 0, w: 0 }),
            ]
        );
    }

    #[test]
    fn test_probability_default_independent_of_color() {
        let stars = StarsEffect::new();
        let params = EffectParams::new().set("color", red_color());

        let plan = stars.translate(&params, "Stars").unwrap();
        assert_eq!(
            plan.calls[0],
            SetterCall::new("set_stars_probability", SetterValue::Percent(10.0))
        );
    }

    #[test]
    fn test_unknown_parameter_emits_nothing() {
        let stars = StarsEffect::new();
        let params = EffectParams::new().set("probabilty", "25%");
        assert!(stars.translate(&params, "Stars").is_err());
    }
}
