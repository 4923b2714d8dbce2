use std::str::FromStr;

use crate::{
    assets::store::background_path,
    background::texture::texture_css,
    foundation::error::{CardError, WithWarnings},
};

/// Which background layers are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BackgroundMode {
    #[default]
    #[serde(rename = "gradient")]
    Gradient,
    #[serde(rename = "texture")]
    Texture,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "grad+tex")]
    GradientTexture,
    #[serde(rename = "img+tex")]
    ImageTexture,
}

impl BackgroundMode {
    pub const ALL: [BackgroundMode; 5] = [
        BackgroundMode::Gradient,
        BackgroundMode::Texture,
        BackgroundMode::Image,
        BackgroundMode::GradientTexture,
        BackgroundMode::ImageTexture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::Texture => "texture",
            BackgroundMode::Image => "image",
            BackgroundMode::GradientTexture => "grad+tex",
            BackgroundMode::ImageTexture => "img+tex",
        }
    }

    pub fn shows_gradient(self) -> bool {
        matches!(self, BackgroundMode::Gradient | BackgroundMode::GradientTexture)
    }

    pub fn shows_texture(self) -> bool {
        matches!(
            self,
            BackgroundMode::Texture | BackgroundMode::GradientTexture | BackgroundMode::ImageTexture
        )
    }

    pub fn shows_image(self) -> bool {
        matches!(self, BackgroundMode::Image | BackgroundMode::ImageTexture)
    }
}

impl FromStr for BackgroundMode {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        BackgroundMode::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or_else(|| CardError::configuration_missing("background mode", s.trim()))
    }
}

impl std::fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextureSpec {
    /// Texture kind name, resolved when the layer is shown.
    pub kind: String,
    /// Tile size in pixels.
    pub scale: i32,
    pub opacity_pct: f64,
}

impl Default for TextureSpec {
    fn default() -> Self {
        Self {
            kind: "dots".to_string(),
            scale: 40,
            opacity_pct: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImageSpec {
    /// Background catalog key, relative path or ready `url(...)` value.
    pub source: Option<String>,
    pub opacity_pct: f64,
    pub blur_px: f64,
    pub brightness_pct: f64,
    pub vignette_px: f64,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            source: None,
            opacity_pct: 100.0,
            blur_px: 0.0,
            brightness_pct: 100.0,
            vignette_px: 0.0,
        }
    }
}

impl ImageSpec {
    /// CSS `filter` for the image layer.
    pub fn filter_css(&self) -> String {
        format!(
            "blur({}px) brightness({})",
            self.blur_px,
            self.brightness_pct / 100.0
        )
    }

    /// CSS `box-shadow` producing the vignette.
    pub fn vignette_css(&self) -> String {
        format!(
            "inset 0 0 {}px {}px rgba(0,0,0,.25)",
            self.vignette_px,
            self.vignette_px / 2.0
        )
    }

    /// CSS `background-image` for the source.
    pub fn image_css(&self) -> String {
        match self.source.as_deref().map(str::trim) {
            None | Some("") => "none".to_string(),
            Some(s) if s.starts_with("url(") => s.to_string(),
            Some(s) if s.contains('/') || s.contains('.') => format!("url('{s}')"),
            Some(key) => format!("url('{}')", background_path(key)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureLayer {
    pub css: String,
    pub opacity_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageLayer {
    pub image_css: String,
    pub opacity_pct: f64,
    pub filter_css: String,
    pub vignette_css: String,
}

/// The visible background layers, bottom to top: gradient, image, texture.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack {
    pub mode: BackgroundMode,
    pub gradient: Option<String>,
    pub texture: Option<TextureLayer>,
    pub image: Option<ImageLayer>,
}

impl LayerStack {
    pub fn gradient_visible(&self) -> bool {
        self.gradient.is_some()
    }

    pub fn texture_visible(&self) -> bool {
        self.texture.is_some()
    }

    pub fn image_visible(&self) -> bool {
        self.image.is_some()
    }

    pub fn texture_css(&self) -> Option<&str> {
        self.texture.as_ref().map(|t| t.css.as_str())
    }

    pub fn image_filter_css(&self) -> Option<&str> {
        self.image.as_ref().map(|i| i.filter_css.as_str())
    }
}

fn checked_pct(what: &str, pct: f64, warnings: &mut Vec<CardError>) -> f64 {
    if (0.0..=100.0).contains(&pct) {
        return pct;
    }
    let clamped = if pct.is_nan() { 100.0 } else { pct.clamp(0.0, 100.0) };
    tracing::warn!(layer = what, pct, clamped, "opacity out of range");
    warnings.push(CardError::invalid_parameter(format!(
        "{what} opacity must be within 0..=100, got {pct}"
    )));
    clamped
}

/// Resolve which layers `mode` shows and compute their CSS.
///
/// Opacities in range are passed through untouched; hidden layers are not computed at all.
pub fn compute_layers(
    mode: BackgroundMode,
    gradient_css: &str,
    texture: &TextureSpec,
    image: &ImageSpec,
) -> WithWarnings<LayerStack> {
    let mut warnings = Vec::new();

    let gradient = mode.shows_gradient().then(|| gradient_css.to_string());

    let texture = if mode.shows_texture() {
        let css = texture_css(&texture.kind, texture.scale).drain_into(&mut warnings);
        Some(TextureLayer {
            css,
            opacity_pct: checked_pct("texture", texture.opacity_pct, &mut warnings),
        })
    } else {
        None
    };

    let image = if mode.shows_image() {
        Some(ImageLayer {
            image_css: image.image_css(),
            opacity_pct: checked_pct("image", image.opacity_pct, &mut warnings),
            filter_css: image.filter_css(),
            vignette_css: image.vignette_css(),
        })
    } else {
        None
    };

    WithWarnings::new(
        LayerStack {
            mode,
            gradient,
            texture,
            image,
        },
        warnings,
    )
}

/// Everything the background controls hold, including parameters of hidden layers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackgroundState {
    pub mode: BackgroundMode,
    /// Gradient override; the theme backdrop is used when unset.
    pub gradient: Option<String>,
    pub texture: TextureSpec,
    pub image: ImageSpec,
}

impl BackgroundState {
    /// Switch modes; parameters of layers the new mode hides are kept.
    pub fn set_mode(&mut self, mode: BackgroundMode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "background mode");
        }
        self.mode = mode;
    }

    pub fn layers(&self, theme_backdrop: &str) -> WithWarnings<LayerStack> {
        let gradient = self.gradient.as_deref().unwrap_or(theme_backdrop);
        compute_layers(self.mode, gradient, &self.texture, &self.image)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/compositor.rs"]
mod tests;
