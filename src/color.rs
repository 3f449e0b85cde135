//! 8-bit color records assembled from percentage-valued channels.

use std::fmt;

use crate::effects::traits::EffectParams;
use crate::error::SchemaError;
use crate::schema::{self, Percentage};

type Result<T> = std::result::Result<T, SchemaError>;

const RGB_CHANNELS: [&str; 3] = ["red", "green", "blue"];
const RGBW_CHANNELS: [&str; 4] = ["red", "green", "blue", "white"];

/// Three-channel 8-bit color, used for background-color directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Four-channel 8-bit color for strips with a dedicated white channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl fmt::Display for ColorRgbw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.w)
    }
}

/// Read a red/green/blue color sub-record, each channel defaulting to 0%
///
/// A missing sub-record is treated as all channels at their defaults. Errors
/// carry the full key path, e.g. `color.red`.
pub fn rgb(params: &EffectParams, key: &str) -> Result<ColorRgb> {
    let sub = params.sub_record(key)?;
    let channels = parse_channels::<3>(&sub, &RGB_CHANNELS).map_err(|e| e.nested_under(key))?;
    let [r, g, b] = channels;
    Ok(ColorRgb { r, g, b })
}

/// Read a red/green/blue/white color sub-record, each channel defaulting to 0%
pub fn rgbw(params: &EffectParams, key: &str) -> Result<ColorRgbw> {
    let sub = params.sub_record(key)?;
    let channels = parse_channels::<4>(&sub, &RGBW_CHANNELS).map_err(|e| e.nested_under(key))?;
    let [r, g, b, w] = channels;
    Ok(ColorRgbw { r, g, b, w })
}

fn parse_channels<const N: usize>(sub: &EffectParams, names: &[&str; N]) -> Result<[u8; N]> {
    schema::reject_unknown_keys(sub, names)?;
    let mut channels = [0u8; N];
    for (slot, name) in channels.iter_mut().zip(names) {
        *slot = schema::percentage(sub, name, Percentage::ZERO)?.channel();
    }
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::traits::{EffectParams, ParamValue};
    use std::collections::BTreeMap;

    fn color_params(channels: &[(&str, ParamValue)]) -> EffectParams {
        let map: BTreeMap<String, ParamValue> = channels
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        EffectParams::new().set("color", ParamValue::Map(map))
    }

    #[test]
    fn test_missing_record_defaults_to_black() {
        let params = EffectParams::new();
        assert_eq!(
            rgbw(&params, "color").unwrap(),
            ColorRgbw { r: 0, g: 0, b: 0, w: 0 }
        );
        assert_eq!(rgb(&params, "color").unwrap(), ColorRgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_channels_rescaled_to_eight_bits() {
        let params = color_params(&[
            ("red", ParamValue::Float(1.0)),
            ("green", ParamValue::String("50%".to_string())),
        ]);

        let color = rgbw(&params, "color").unwrap();
        assert_eq!(color, ColorRgbw { r: 255, g: 128, b: 0, w: 0 });
    }

    #[test]
    fn test_rgb_record_rejects_white_channel() {
        let params = color_params(&[("white", ParamValue::Float(1.0))]);
        let err = rgb(&params, "color").unwrap_err();
        assert!(err.to_string().contains("white"));
    }

    #[test]
    fn test_channel_error_carries_key_path() {
        let params = color_params(&[("red", ParamValue::Float(1.5))]);
        let err = rgbw(&params, "color").unwrap_err();
        assert!(err.to_string().contains("color.red"));
    }

    #[test]
    fn test_scalar_color_value_rejected() {
        let params = EffectParams::new().set("color", "red");
        assert!(rgbw(&params, "color").is_err());
    }
}
