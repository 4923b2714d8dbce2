//! Procedural CSS textures.
//!
//! Every kind is a pure function of an integer tile size in pixels.

use std::str::FromStr;

use crate::foundation::error::{CardError, WithWarnings};

/// Smallest tile size a texture is generated with.
pub const MIN_TEXTURE_SCALE: i32 = 1;

const NOISE_SVG: &str = "%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20viewBox%3D%220%200%20100%20100%22%3E%3Cfilter%20id%3D%22n%22%3E%3CfeTurbulence%20type%3D%22fractalNoise%22%20baseFrequency%3D%220.8%22%20numOctaves%3D%224%22%20stitchTiles%3D%22stitch%22%2F%3E%3C%2Ffilter%3E%3Crect%20width%3D%22100%25%22%20height%3D%22100%25%22%20filter%3D%22url(%23n)%22%20opacity%3D%220.08%22%2F%3E%3C%2Fsvg%3E";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureKind {
    Stripes,
    Dots,
    Grid,
    Crosshatch,
    Chevron,
    Checker,
    Sprinkles,
    Pluses,
    Waves,
    Noise,
}

impl TextureKind {
    pub const ALL: [TextureKind; 10] = [
        TextureKind::Stripes,
        TextureKind::Dots,
        TextureKind::Grid,
        TextureKind::Crosshatch,
        TextureKind::Chevron,
        TextureKind::Checker,
        TextureKind::Sprinkles,
        TextureKind::Pluses,
        TextureKind::Waves,
        TextureKind::Noise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextureKind::Stripes => "stripes",
            TextureKind::Dots => "dots",
            TextureKind::Grid => "grid",
            TextureKind::Crosshatch => "crosshatch",
            TextureKind::Chevron => "chevron",
            TextureKind::Checker => "checker",
            TextureKind::Sprinkles => "sprinkles",
            TextureKind::Pluses => "pluses",
            TextureKind::Waves => "waves",
            TextureKind::Noise => "noise",
        }
    }

    /// CSS `background` value for a tile of `scale` pixels.
    ///
    /// Callers clamp `scale` first; see [`texture_css`].
    pub fn css(self, scale: i32) -> String {
        let s = f64::from(scale);
        let half = s / 2.0;
        let quarter = s / 4.0;
        match self {
            TextureKind::Stripes => format!(
                "repeating-linear-gradient(45deg, rgba(255,255,255,.0) 0, rgba(255,255,255,.0) {half}px, rgba(0,0,0,.06) {half}px, rgba(0,0,0,.06) {s}px)"
            ),
            TextureKind::Dots => format!(
                "radial-gradient(circle at 25% 25%, rgba(0,0,0,.08) 12%, transparent 13%) {half}px {half}px / {s}px {s}px repeat"
            ),
            TextureKind::Grid => format!(
                "repeating-linear-gradient(0deg, rgba(0,0,0,.06), rgba(0,0,0,.06) 1px, transparent 1px, transparent {s}px), repeating-linear-gradient(90deg, rgba(0,0,0,.06), rgba(0,0,0,.06) 1px, transparent 1px, transparent {s}px)"
            ),
            TextureKind::Crosshatch => format!(
                "repeating-linear-gradient(45deg, rgba(0,0,0,.05) 0, rgba(0,0,0,.05) 1px, transparent 1px, transparent {s}px), repeating-linear-gradient(-45deg, rgba(0,0,0,.05) 0, rgba(0,0,0,.05) 1px, transparent 1px, transparent {s}px)"
            ),
            TextureKind::Chevron => format!(
                "repeating-linear-gradient(135deg, rgba(0,0,0,.05) 0, rgba(0,0,0,.05) {quarter}px, transparent {quarter}px, transparent {half}px), repeating-linear-gradient(45deg, rgba(0,0,0,.05) 0, rgba(0,0,0,.05) {quarter}px, transparent {quarter}px, transparent {half}px)"
            ),
            TextureKind::Checker => format!(
                "linear-gradient(45deg, rgba(0,0,0,.04) 25%, transparent 25%, transparent 75%, rgba(0,0,0,.04) 75%), linear-gradient(45deg, rgba(0,0,0,.04) 25%, transparent 25%, transparent 75%, rgba(0,0,0,.04) 75%) {half}px {half}px / {s}px {s}px"
            ),
            TextureKind::Sprinkles => format!(
                "radial-gradient(circle, rgba(0,0,0,.08) 2px, transparent 2px) 0 0 / {s}px {s}px repeat, radial-gradient(circle, rgba(0,0,0,.06) 1px, transparent 1px) {half}px {half}px / {s}px {s}px repeat"
            ),
            TextureKind::Pluses => {
                let a = s - 2.0;
                let b = s - 1.0;
                format!(
                    "repeating-linear-gradient(0deg, transparent 0 {a}px, rgba(0,0,0,.06) {a}px {b}px, transparent {b}px {s}px), repeating-linear-gradient(90deg, transparent 0 {a}px, rgba(0,0,0,.06) {a}px {b}px, transparent {b}px {s}px)"
                )
            }
            TextureKind::Waves => format!(
                "radial-gradient(50% 8px at 0 8px, rgba(0,0,0,.06) 50%, transparent 51%) 0 0/ {s}px {s}px repeat-x"
            ),
            TextureKind::Noise => format!("url('data:image/svg+xml;utf8,{NOISE_SVG}')"),
        }
    }
}

impl FromStr for TextureKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        TextureKind::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| CardError::configuration_missing("texture", s.trim()))
    }
}

impl std::fmt::Display for TextureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS for a texture named by `kind`, degrading instead of failing.
///
/// `"none"` and the empty string select no texture. Unknown kinds yield `none` with a
/// [`CardError::ConfigurationMissing`] warning; a scale below [`MIN_TEXTURE_SCALE`] is clamped with
/// a [`CardError::InvalidParameter`] warning.
pub fn texture_css(kind: &str, scale: i32) -> WithWarnings<String> {
    let trimmed = kind.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return WithWarnings::clean("none".to_string());
    }

    let mut warnings = Vec::new();
    let kind = match trimmed.parse::<TextureKind>() {
        Ok(k) => k,
        Err(err) => {
            tracing::warn!(texture = trimmed, "unknown texture, rendering none");
            return WithWarnings::new("none".to_string(), vec![err]);
        }
    };

    let scale = if scale < MIN_TEXTURE_SCALE {
        tracing::warn!(scale, "texture scale clamped to {MIN_TEXTURE_SCALE}");
        warnings.push(CardError::invalid_parameter(format!(
            "texture scale must be >= {MIN_TEXTURE_SCALE}, got {scale}"
        )));
        MIN_TEXTURE_SCALE
    } else {
        scale
    };

    WithWarnings::new(kind.css(scale), warnings)
}

#[cfg(test)]
#[path = "../../tests/unit/background/texture.rs"]
mod tests;
