use crate::{
    background::compositor::BackgroundState,
    edges::layer::EdgeSpec,
    foundation::{
        core::{Canvas, ColorHex},
        error::{CardError, CardResult},
    },
    sprites::placement::AnimationMode,
    theme::model::Theme,
};

/// Largest sprite density accepted from card files.
pub const MAX_DENSITY: usize = 500;

/// Serialized description of a whole card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardSpec {
    pub canvas: Canvas,
    /// Built-in theme name; unknown names fall back to `pool` at render time.
    pub theme: String,
    /// Replaces the built-in data of the `custom` theme.
    pub custom_theme: Option<Theme>,
    /// Placement seed; a fresh one is drawn when absent.
    pub seed: Option<i32>,
    pub sprites: SpriteSettings,
    /// Catalog decorations to place.
    pub decorations: Vec<String>,
    pub decoration_placement: DecorationPlacement,
    pub background: BackgroundState,
    pub edge: EdgeSpec,
    pub text: CardText,
    pub accent: ColorHex,
    pub accent2: ColorHex,
}

impl Default for CardSpec {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            theme: "pool".to_string(),
            custom_theme: None,
            seed: None,
            sprites: SpriteSettings::default(),
            decorations: Vec::new(),
            decoration_placement: DecorationPlacement::Anchored,
            background: BackgroundState::default(),
            edge: EdgeSpec::default(),
            text: CardText::default(),
            accent: ColorHex::parse("#ff6b6b").unwrap_or_else(|_| ColorHex::black()),
            accent2: ColorHex::parse("#4ecdc4").unwrap_or_else(|_| ColorHex::black()),
        }
    }
}

/// How catalog decorations are positioned on the card.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DecorationPlacement {
    /// Each decoration sits on one of its catalog anchors.
    #[default]
    Anchored,
    /// Random position, rotation, scale and opacity, drawn after the sprites.
    Scattered,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteSettings {
    pub density: usize,
    pub scale_pct: f64,
    pub animation: AnimationMode,
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            density: 15,
            scale_pct: 100.0,
            animation: AnimationMode::Gentle,
        }
    }
}

/// Text blocks of the card; empty fields are not rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardText {
    pub pill: String,
    pub title: String,
    pub subtitle: String,
    pub names: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub rsvp: String,
}

impl CardText {
    pub fn is_empty(&self) -> bool {
        [
            &self.pill,
            &self.title,
            &self.subtitle,
            &self.names,
            &self.date,
            &self.time,
            &self.location,
            &self.rsvp,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

impl CardSpec {
    pub fn from_json(s: &str) -> CardResult<Self> {
        let spec: Self = serde_json::from_str(s).map_err(|e| CardError::serde(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_json_pretty(&self) -> CardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CardError::serde(e.to_string()))
    }

    pub fn validate(&self) -> CardResult<()> {
        self.canvas.validate()?;
        if self.sprites.density > MAX_DENSITY {
            return Err(CardError::validation(format!(
                "sprite density must be <= {MAX_DENSITY}, got {}",
                self.sprites.density
            )));
        }
        if !self.sprites.scale_pct.is_finite() {
            return Err(CardError::validation("sprite scale_pct must be finite"));
        }
        if let Some(theme) = &self.custom_theme {
            theme.validate()?;
        }
        if self.seed == Some(0) {
            tracing::warn!("card seed 0 will be replaced by the default seed");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
