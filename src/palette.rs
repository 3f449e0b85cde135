//! The closed set of twinkle palettes and its case-insensitive lookup.

use std::fmt;

use crate::effects::traits::{EffectParams, ParamValue};
use crate::error::SchemaError;

/// Named color-gradient palette used by the TwinkleFox effect
///
/// The set is closed: configuration input must match one of these names
/// (case-insensitively) or validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinklePalette {
    PartyColors,
    OceanColors,
    LavaColors,
    ForestColors,
    RainbowColors,
    SnowColors,
    HollyColors,
    IceColors,
    FairyLight,
    RetroC9,
}

/// Lookup table keyed by the normalized (lower-cased) configuration name
const PALETTE_NAMES: [(&str, TwinklePalette); 10] = [
    ("party_colors", TwinklePalette::PartyColors),
    ("ocean_colors", TwinklePalette::OceanColors),
    ("lava_colors", TwinklePalette::LavaColors),
    ("forest_colors", TwinklePalette::ForestColors),
    ("rainbow_colors", TwinklePalette::RainbowColors),
    ("snow_colors", TwinklePalette::SnowColors),
    ("holly_colors", TwinklePalette::HollyColors),
    ("ice_colors", TwinklePalette::IceColors),
    ("fairy_light", TwinklePalette::FairyLight),
    ("retro_c9", TwinklePalette::RetroC9),
];

impl TwinklePalette {
    /// Resolve a configuration name, ignoring ASCII case
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        PALETTE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, palette)| *palette)
    }

    /// Canonical configuration name of this palette
    pub fn name(&self) -> &'static str {
        match self {
            Self::PartyColors => "party_colors",
            Self::OceanColors => "ocean_colors",
            Self::LavaColors => "lava_colors",
            Self::ForestColors => "forest_colors",
            Self::RainbowColors => "rainbow_colors",
            Self::SnowColors => "snow_colors",
            Self::HollyColors => "holly_colors",
            Self::IceColors => "ice_colors",
            Self::FairyLight => "fairy_light",
            Self::RetroC9 => "retro_c9",
        }
    }

    /// All recognized configuration names, in declaration order
    pub fn names() -> impl Iterator<Item = &'static str> {
        PALETTE_NAMES.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for TwinklePalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coerce a palette parameter, defaulting when the key is absent
///
/// Unrecognized names fail with an error listing the whole allowed set.
pub fn palette(
    params: &EffectParams,
    key: &str,
    default: TwinklePalette,
) -> Result<TwinklePalette, SchemaError> {
    let Some(value) = params.get(key) else {
        return Ok(default);
    };

    match value {
        ParamValue::String(s) => TwinklePalette::parse(s).ok_or_else(|| SchemaError::UnknownValue {
            key: key.to_string(),
            value: s.clone(),
            allowed: TwinklePalette::names().collect::<Vec<_>>().join(", "),
        }),
        other => Err(SchemaError::TypeMismatch {
            key: key.to_string(),
            expected: "palette name",
            found: other.type_name().to_string(),
        }),
    }
}
