use std::str::FromStr;

use crate::foundation::error::{CardError, WithWarnings};

/// Silhouette family applied to all four card borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    None,
    Border,
    Torn,
    Scalloped,
    Zigzag,
    Wave,
    Spikes,
    Dots,
    Geometric,
    Organic,
    Vintage,
}

impl EdgeStyle {
    pub const ALL: [EdgeStyle; 11] = [
        EdgeStyle::None,
        EdgeStyle::Border,
        EdgeStyle::Torn,
        EdgeStyle::Scalloped,
        EdgeStyle::Zigzag,
        EdgeStyle::Wave,
        EdgeStyle::Spikes,
        EdgeStyle::Dots,
        EdgeStyle::Geometric,
        EdgeStyle::Organic,
        EdgeStyle::Vintage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeStyle::None => "none",
            EdgeStyle::Border => "border",
            EdgeStyle::Torn => "torn",
            EdgeStyle::Scalloped => "scalloped",
            EdgeStyle::Zigzag => "zigzag",
            EdgeStyle::Wave => "wave",
            EdgeStyle::Spikes => "spikes",
            EdgeStyle::Dots => "dots",
            EdgeStyle::Geometric => "geometric",
            EdgeStyle::Organic => "organic",
            EdgeStyle::Vintage => "vintage",
        }
    }

    /// Whether paths for this style change on every call.
    pub fn is_randomized(self) -> bool {
        self == EdgeStyle::Torn
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeVariant {
    #[default]
    Default,
    Rough,
    Smooth,
    Sharp,
    Soft,
}

impl EdgeVariant {
    pub const ALL: [EdgeVariant; 5] = [
        EdgeVariant::Default,
        EdgeVariant::Rough,
        EdgeVariant::Smooth,
        EdgeVariant::Sharp,
        EdgeVariant::Soft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeVariant::Default => "default",
            EdgeVariant::Rough => "rough",
            EdgeVariant::Smooth => "smooth",
            EdgeVariant::Sharp => "sharp",
            EdgeVariant::Soft => "soft",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

macro_rules! parse_by_name {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = CardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == key)
                    .ok_or_else(|| CardError::configuration_missing($kind, s.trim()))
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

parse_by_name!(EdgeStyle, "edge style");
parse_by_name!(EdgeVariant, "edge variant");
parse_by_name!(Side, "edge side");

/// Resolve user-facing style and variant names.
///
/// An unknown variant falls back to [`EdgeVariant::Default`]; an unknown style resolves to `None`
/// (nothing is drawn). Both cases carry a [`CardError::ConfigurationMissing`] warning.
pub fn resolve_edge(style: &str, variant: &str) -> WithWarnings<Option<(EdgeStyle, EdgeVariant)>> {
    let mut warnings = Vec::new();
    let style = match style.parse::<EdgeStyle>() {
        Ok(EdgeStyle::None) => return WithWarnings::clean(None),
        Ok(s) => s,
        Err(err) => {
            tracing::warn!(style, "unknown edge style, drawing no border");
            return WithWarnings::new(None, vec![err]);
        }
    };
    let variant = match variant.parse::<EdgeVariant>() {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(variant, style = %style, "unknown edge variant, using default");
            warnings.push(err);
            EdgeVariant::Default
        }
    };
    WithWarnings::new(Some((style, variant)), warnings)
}

#[cfg(test)]
#[path = "../../tests/unit/edges/style.rs"]
mod tests;
