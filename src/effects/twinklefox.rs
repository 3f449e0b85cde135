use crate::{
    color,
    effects::traits::{EffectParams, EffectPlan, EffectSchema, SetterCall},
    error::Result,
    palette::{self, TwinklePalette},
    schema,
};

const PARAMETERS: [&str; 6] = [
    "twinkle_speed",
    "twinkle_density",
    "cool_like_incandescent",
    "auto_background",
    "palette",
    "color",
];

const DEFAULT_SPEED: i64 = 4;
const DEFAULT_DENSITY: i64 = 5;
const DEFAULT_PALETTE: TwinklePalette = TwinklePalette::PartyColors;

/// Schema for the TwinkleFox twinkle effect
///
/// Pixels twinkle in colors drawn from a named palette over a configurable
/// background color. The background is a 3-channel construction; unlike the
/// stars effect there is no white channel.
pub struct TwinkleFoxEffect;

impl TwinkleFoxEffect {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TwinkleFoxEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectSchema for TwinkleFoxEffect {
    fn kind(&self) -> &'static str {
        "addressable_twinklefox"
    }

    fn label(&self) -> &'static str {
        "TwinkleFox"
    }

    fn description(&self) -> &str {
        "Palette-driven twinkles fading over a background color"
    }

    fn parameters(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("twinkle_speed", "Twinkle animation speed (1-8, default 4)"),
            ("twinkle_density", "How many pixels twinkle at once (1-8, default 5)"),
            (
                "cool_like_incandescent",
                "Fade through red like a cooling incandescent bulb (default true)",
            ),
            (
                "auto_background",
                "Derive the background from the palette instead of a fixed color (default false)",
            ),
            ("palette", "Twinkle color palette name (default party_colors)"),
            ("color", "Background color as red/green/blue percentages (default all 0%)"),
        ]
    }

    fn translate(&self, params: &EffectParams, instance: &str) -> Result<EffectPlan> {
        schema::reject_unknown_keys(params, &PARAMETERS)?;

        let speed = schema::int_range(params, "twinkle_speed", 1, 8, DEFAULT_SPEED)?;
        let density = schema::int_range(params, "twinkle_density", 1, 8, DEFAULT_DENSITY)?;
        let cool = schema::boolean(params, "cool_like_incandescent", true)?;
        let auto_background = schema::boolean(params, "auto_background", false)?;
        let twinkle_palette = palette::palette(params, "palette", DEFAULT_PALETTE)?;
        let background = color::rgb(params, "color")?;

        Ok(EffectPlan {
            kind: self.kind(),
            instance: instance.to_string(),
            calls: vec![
                SetterCall::new("set_twinkle_speed", speed as u8),
                SetterCall::new("set_twinkle_density", density as u8),
                SetterCall::new("set_cool_like_incandescent", cool),
                SetterCall::new("set_auto_background", auto_background),
                SetterCall::new("set_palette", twinkle_palette),
                SetterCall::new("set_background_color", background),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRgb;
    use crate::effects::traits::SetterValue;

    #[test]
    fn test_defaults_only() {
        let twinklefox = TwinkleFoxEffect::new();
        let plan = twinklefox
            .translate(&EffectParams::new(), "TwinkleFox")
            .unwrap();

        assert_eq!(
            plan.calls,
            vec![
                SetterCall::new("set_twinkle_speed", 4u8),
                SetterCall::new("set_twinkle_density", 5u8),
                SetterCall::new("set_cool_like_incandescent", true),
                SetterCall::new("set_auto_background", false),
                SetterCall::new("set_palette", TwinklePalette::PartyColors),
                SetterCall::new("set_background_color", ColorRgb { r: 0, g: 0, b: 0 }),
            ]
        );
    }

    #[test]
    fn test_speed_and_density_bounds() {
        let twinklefox = TwinkleFoxEffect::new();

        for accepted in [1i64, 8] {
            let params = EffectParams::new().set("twinkle_speed", accepted);
            assert!(twinklefox.translate(&params, "TwinkleFox").is_ok());
        }
        for rejected in [0i64, 9] {
            let params = EffectParams::new().set("twinkle_speed", rejected);
            assert!(twinklefox.translate(&params, "TwinkleFox").is_err());
            let params = EffectParams::new().set("twinkle_density", rejected);
            assert!(twinklefox.translate(&params, "TwinkleFox").is_err());
        }
    }

    #[test]
    fn test_palette_is_case_insensitive() {
        let twinklefox = TwinkleFoxEffect::new();
        let params = EffectParams::new().set("palette", "Snow_Colors");

        let plan = twinklefox.translate(&params, "TwinkleFox").unwrap();
        assert_eq!(
            plan.calls[4],
            SetterCall::new("set_palette", TwinklePalette::SnowColors)
        );
    }

    #[test]
    fn test_unrecognized_palette_emits_nothing() {
        let twinklefox = TwinkleFoxEffect::new();
        let params = EffectParams::new().set("palette", "neon");
        assert!(twinklefox.translate(&params, "TwinkleFox").is_err());
    }

    #[test]
    fn test_background_color_is_three_channels() {
        let twinklefox = TwinkleFoxEffect::new();
        let params = EffectParams::new().set("color", {
            let mut map = std::collections::BTreeMap::new();
            map.insert(
                "blue".to_string(),
                crate::effects::traits::ParamValue::String("100%".to_string()),
            );
            crate::effects::traits::ParamValue::Map(map)
        });

        let plan = twinklefox.translate(&params, "TwinkleFox").unwrap();
        assert_eq!(
            plan.calls[5].value,
            SetterValue::Rgb(ColorRgb { r: 0, g: 0, b: 255 })
        );
    }
}
