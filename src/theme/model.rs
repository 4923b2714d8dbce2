use std::str::FromStr;

use crate::foundation::{
    core::ColorHex,
    error::{CardError, CardResult, WithWarnings},
};

/// Palette used when a theme ships without colors.
pub const FALLBACK_PALETTE: [&str; 3] = ["#4a90e2", "#f39c12", "#e74c3c"];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A bundle of permitted sprite ids, a color palette and a backdrop gradient.
pub struct Theme {
    /// Sprite ids cycled through by index (`i % len`). Must be non-empty.
    pub sprites: Vec<String>,
    /// Colors cycled through by index (`i % len`).
    #[serde(default)]
    pub palette: Vec<ColorHex>,
    /// CSS gradient drawn by the gradient background layer.
    #[serde(default = "default_gradient")]
    pub gradient: String,
}

fn default_gradient() -> String {
    "linear-gradient(180deg,#f0f8ff 0%, #e6f3ff 100%)".to_string()
}

impl Theme {
    pub fn new(
        sprites: impl IntoIterator<Item = impl Into<String>>,
        palette: impl IntoIterator<Item = ColorHex>,
        gradient: impl Into<String>,
    ) -> CardResult<Self> {
        let theme = Self {
            sprites: sprites.into_iter().map(Into::into).collect(),
            palette: palette.into_iter().collect(),
            gradient: gradient.into(),
        };
        theme.validate()?;
        Ok(theme)
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.sprites.is_empty() {
            return Err(CardError::validation("theme sprites must be non-empty"));
        }
        if self.sprites.iter().any(|s| s.trim().is_empty()) {
            return Err(CardError::validation("theme sprite ids must be non-empty"));
        }
        Ok(())
    }

    /// Sprite id for placement index `i`, or `None` for a theme without sprites.
    pub fn sprite_for(&self, i: usize) -> Option<&str> {
        if self.sprites.is_empty() {
            return None;
        }
        Some(self.sprites[i % self.sprites.len()].as_str())
    }

    /// Palette color for placement index `i`, wrapping; falls back to [`FALLBACK_PALETTE`].
    pub fn color_for(&self, i: usize) -> ColorHex {
        if self.palette.is_empty() {
            let hex = FALLBACK_PALETTE[i % FALLBACK_PALETTE.len()];
            return ColorHex::parse(hex).unwrap_or_else(|_| ColorHex::black());
        }
        self.palette[i % self.palette.len()].clone()
    }

    /// The gradient layer background: the theme gradient under two soft white highlights.
    pub fn backdrop_css(&self) -> String {
        format!(
            "radial-gradient(1200px 800px at 10% -10%, rgba(255,255,255,.7), transparent), \
             radial-gradient(1000px 700px at 110% 10%, rgba(255,255,255,.65), transparent), {}",
            self.gradient
        )
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Built-in theme selector.
pub enum ThemeKey {
    #[default]
    Pool,
    Birthday,
    Baby,
    Graduation,
    Holiday,
    Custom,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 6] = [
        ThemeKey::Pool,
        ThemeKey::Birthday,
        ThemeKey::Baby,
        ThemeKey::Graduation,
        ThemeKey::Holiday,
        ThemeKey::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKey::Pool => "pool",
            ThemeKey::Birthday => "birthday",
            ThemeKey::Baby => "baby",
            ThemeKey::Graduation => "graduation",
            ThemeKey::Holiday => "holiday",
            ThemeKey::Custom => "custom",
        }
    }

    /// Parse a theme name, falling back to [`ThemeKey::Pool`] with a warning.
    pub fn resolve(name: &str) -> WithWarnings<ThemeKey> {
        match name.parse() {
            Ok(key) => WithWarnings::clean(key),
            Err(err) => {
                tracing::warn!(theme = name, "unknown theme, falling back to 'pool'");
                WithWarnings::new(ThemeKey::Pool, vec![err])
            }
        }
    }

    pub fn theme(self) -> Theme {
        let (gradient, palette, sprites): (&str, [&str; 5], [&str; 3]) = match self {
            ThemeKey::Pool => (
                "linear-gradient(180deg,#b3e5ff 0%, #e6f9ff 100%)",
                ["#2ec5ff", "#ffd166", "#06d6a0", "#118ab2", "#ef476f"],
                ["floatie", "sunglasses", "flipflop"],
            ),
            ThemeKey::Birthday => (
                "linear-gradient(180deg,#fff5d6 0%, #ffe9ef 100%)",
                ["#ff6b6b", "#ffd166", "#4ecdc4", "#45b7d1", "#c7f464"],
                ["balloon", "confetti", "cake"],
            ),
            ThemeKey::Baby => (
                "linear-gradient(180deg,#e8f3ff 0%, #f7f7fb 100%)",
                ["#a3cef1", "#bde0fe", "#ffc8dd", "#ffafcc", "#cdb4db"],
                ["cloud", "star", "duck"],
            ),
            ThemeKey::Graduation => (
                "linear-gradient(180deg,#fff9e6 0%, #f1f5f9 100%)",
                ["#0f172a", "#f59e0b", "#334155", "#a8a29e", "#ef4444"],
                ["cap", "ribbon", "confetti"],
            ),
            ThemeKey::Holiday => (
                "linear-gradient(180deg,#e5f6ff 0%, #f0fff4 100%)",
                ["#2563eb", "#16a34a", "#dc2626", "#eab308", "#0891b2"],
                ["snow", "tree", "star"],
            ),
            ThemeKey::Custom => (
                "linear-gradient(180deg,#f0f8ff 0%, #e6f3ff 100%)",
                ["#4a90e2", "#f39c12", "#e74c3c", "#27ae60", "#9b59b6"],
                ["balloons", "flowers", "stars"],
            ),
        };

        Theme {
            sprites: sprites.iter().map(|s| (*s).to_string()).collect(),
            palette: palette
                .iter()
                .filter_map(|hex| ColorHex::parse(hex).ok())
                .collect(),
            gradient: gradient.to_string(),
        }
    }
}

impl FromStr for ThemeKey {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ThemeKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| CardError::configuration_missing("theme", s.trim()))
    }
}

impl std::fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;
