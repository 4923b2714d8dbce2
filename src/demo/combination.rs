use crate::{
    background::{compositor::BackgroundMode, texture::TextureKind},
    catalog::elements,
    random::xorshift::XorShift32,
    scene::model::{CardSpec, DecorationPlacement},
};

/// Gradient presets referenced by showcase combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientTint {
    Blue,
    Green,
    Purple,
}

impl GradientTint {
    pub const ALL: [GradientTint; 3] = [GradientTint::Blue, GradientTint::Green, GradientTint::Purple];

    pub fn css(self) -> &'static str {
        match self {
            GradientTint::Blue => "linear-gradient(180deg,#cfe8ff 0%, #eef6ff 100%)",
            GradientTint::Green => "linear-gradient(180deg,#d8f5e1 0%, #f2fff6 100%)",
            GradientTint::Purple => "linear-gradient(180deg,#e6dcff 0%, #f7f2ff 100%)",
        }
    }
}

/// A named background/decoration preset shown by the slideshow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Combination {
    pub name: String,
    pub background: Option<String>,
    pub decorations: Vec<String>,
    pub mode: BackgroundMode,
    pub image_opacity_pct: u32,
    pub image_blur_px: u32,
    pub image_brightness_pct: u32,
    pub image_vignette_px: u32,
    /// `0` leaves the texture settings alone.
    pub texture_opacity_pct: u32,
    pub texture_kind: Option<TextureKind>,
    pub texture_scale: Option<i32>,
    pub gradient_opacity_pct: u32,
    pub gradient_tint: Option<GradientTint>,
}

struct Preset {
    name: &'static str,
    background: Option<&'static str>,
    decorations: &'static [&'static str],
    mode: BackgroundMode,
    image: [u32; 4],
    texture: Option<(u32, TextureKind, i32)>,
    gradient: Option<(u32, GradientTint)>,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "Pure Beach Background",
        background: Some("beach"),
        decorations: &["balloons"],
        mode: BackgroundMode::Image,
        image: [100, 0, 100, 20],
        texture: None,
        gradient: None,
    },
    Preset {
        name: "Pure Forest Background",
        background: Some("forest"),
        decorations: &["flowers"],
        mode: BackgroundMode::Image,
        image: [100, 0, 100, 15],
        texture: None,
        gradient: None,
    },
    Preset {
        name: "Pure Abstract Background",
        background: Some("abstract"),
        decorations: &["stars"],
        mode: BackgroundMode::Image,
        image: [100, 0, 100, 0],
        texture: None,
        gradient: None,
    },
    Preset {
        name: "Beach with Blue Gradient",
        background: Some("beach"),
        decorations: &["balloons", "stars"],
        mode: BackgroundMode::ImageTexture,
        image: [70, 2, 110, 25],
        texture: None,
        gradient: Some((60, GradientTint::Blue)),
    },
    Preset {
        name: "Forest with Green Gradient",
        background: Some("forest"),
        decorations: &["flowers"],
        mode: BackgroundMode::ImageTexture,
        image: [80, 1, 105, 20],
        texture: None,
        gradient: Some((50, GradientTint::Green)),
    },
    Preset {
        name: "Beach with Dots Texture",
        background: Some("beach"),
        decorations: &["balloons"],
        mode: BackgroundMode::ImageTexture,
        image: [85, 0, 100, 20],
        texture: Some((40, TextureKind::Dots, 80)),
        gradient: None,
    },
    Preset {
        name: "Abstract with Grid Texture",
        background: Some("abstract"),
        decorations: &["stars"],
        mode: BackgroundMode::ImageTexture,
        image: [90, 0, 100, 0],
        texture: Some((35, TextureKind::Grid, 120)),
        gradient: None,
    },
    Preset {
        name: "Blue Gradient with Stripes",
        background: None,
        decorations: &["balloons", "flowers"],
        mode: BackgroundMode::GradientTexture,
        image: [0, 0, 100, 0],
        texture: Some((45, TextureKind::Stripes, 100)),
        gradient: Some((100, GradientTint::Blue)),
    },
    Preset {
        name: "Purple Gradient with Noise",
        background: None,
        decorations: &["stars"],
        mode: BackgroundMode::GradientTexture,
        image: [0, 0, 100, 0],
        texture: Some((30, TextureKind::Noise, 150)),
        gradient: Some((100, GradientTint::Purple)),
    },
    Preset {
        name: "Beach + Blue Gradient + Dots + Balloons",
        background: Some("beach"),
        decorations: &["balloons", "stars"],
        mode: BackgroundMode::ImageTexture,
        image: [60, 3, 115, 30],
        texture: Some((50, TextureKind::Dots, 90)),
        gradient: Some((40, GradientTint::Blue)),
    },
    Preset {
        name: "Abstract + Purple Gradient + Grid + Flowers",
        background: Some("abstract"),
        decorations: &["flowers", "stars"],
        mode: BackgroundMode::ImageTexture,
        image: [75, 1, 105, 10],
        texture: Some((40, TextureKind::Grid, 110)),
        gradient: Some((55, GradientTint::Purple)),
    },
];

impl From<&Preset> for Combination {
    fn from(p: &Preset) -> Self {
        let [image_opacity_pct, image_blur_px, image_brightness_pct, image_vignette_px] = p.image;
        Self {
            name: p.name.to_string(),
            background: p.background.map(str::to_string),
            decorations: p.decorations.iter().map(|d| (*d).to_string()).collect(),
            mode: p.mode,
            image_opacity_pct,
            image_blur_px,
            image_brightness_pct,
            image_vignette_px,
            texture_opacity_pct: p.texture.map_or(0, |t| t.0),
            texture_kind: p.texture.map(|t| t.1),
            texture_scale: p.texture.map(|t| t.2),
            gradient_opacity_pct: p.gradient.map_or(0, |g| g.0),
            gradient_tint: p.gradient.map(|g| g.1),
        }
    }
}

/// The showcase slides, in presentation order.
pub fn builtin_combinations() -> Vec<Combination> {
    PRESETS.iter().map(Combination::from).collect()
}

/// Modes the random generators pick from.
pub(crate) const RANDOM_MODES: [BackgroundMode; 3] = [
    BackgroundMode::Image,
    BackgroundMode::ImageTexture,
    BackgroundMode::GradientTexture,
];

/// Texture kinds the random generators pick from.
pub(crate) const RANDOM_TEXTURES: [TextureKind; 4] = [
    TextureKind::Dots,
    TextureKind::Grid,
    TextureKind::Stripes,
    TextureKind::Noise,
];

/// Draw `1..=max` distinct decoration keys; repeated picks are dropped, not redrawn.
pub(crate) fn pick_decorations(rng: &mut XorShift32, max: u32) -> Vec<String> {
    let all = elements::decorations();
    let count = rng.int_below(1, max);
    let mut out: Vec<String> = Vec::new();
    for _ in 0..count {
        let key = all[rng.index(all.len())].key;
        if !out.iter().any(|k| k == key) {
            out.push(key.to_string());
        }
    }
    out
}

impl Combination {
    /// A random slide; `serial` numbers the generated name.
    ///
    /// Draws: background, decoration count and picks, mode, the four image settings, texture
    /// opacity (only for `grad+tex`), texture kind, texture scale, gradient opacity (only for
    /// `img+tex`) and gradient tint.
    pub fn random(rng: &mut XorShift32, serial: usize) -> Self {
        let backgrounds = elements::backgrounds();
        let background = backgrounds[rng.index(backgrounds.len())].key.to_string();
        let decorations = pick_decorations(rng, 3);
        let mode = RANDOM_MODES[rng.index(RANDOM_MODES.len())];

        let image_opacity_pct = rng.int_below(60, 40);
        let image_blur_px = rng.int_below(0, 5);
        let image_brightness_pct = rng.int_below(85, 30);
        let image_vignette_px = rng.int_below(0, 30);
        let texture_opacity_pct = if mode == BackgroundMode::GradientTexture {
            rng.int_below(20, 50)
        } else {
            0
        };
        let texture_kind = RANDOM_TEXTURES[rng.index(RANDOM_TEXTURES.len())];
        let texture_scale = rng.int_below(50, 100) as i32;
        let gradient_opacity_pct = if mode == BackgroundMode::ImageTexture {
            rng.int_below(30, 40)
        } else {
            0
        };
        let gradient_tint = GradientTint::ALL[rng.index(GradientTint::ALL.len())];

        Self {
            name: format!("Random Combination {serial}"),
            background: Some(background),
            decorations,
            mode,
            image_opacity_pct,
            image_blur_px,
            image_brightness_pct,
            image_vignette_px,
            texture_opacity_pct,
            texture_kind: Some(texture_kind),
            texture_scale: Some(texture_scale),
            gradient_opacity_pct,
            gradient_tint: Some(gradient_tint),
        }
    }

    /// Load this preset into a card: background state and decorations.
    pub fn apply(&self, spec: &mut CardSpec) {
        let bg = &mut spec.background;
        bg.set_mode(self.mode);
        if let Some(key) = &self.background {
            bg.image.source = Some(key.clone());
        }
        bg.image.opacity_pct = f64::from(self.image_opacity_pct);
        bg.image.blur_px = f64::from(self.image_blur_px);
        bg.image.brightness_pct = f64::from(self.image_brightness_pct);
        bg.image.vignette_px = f64::from(self.image_vignette_px);

        if self.texture_opacity_pct > 0 {
            bg.texture.opacity_pct = f64::from(self.texture_opacity_pct);
            bg.texture.scale = self.texture_scale.unwrap_or(100);
            if let Some(kind) = self.texture_kind {
                bg.texture.kind = kind.as_str().to_string();
            }
        }
        if let Some(tint) = self.gradient_tint {
            bg.gradient = Some(tint.css().to_string());
        }

        if !self.decorations.is_empty() {
            spec.decorations = self.decorations.clone();
            spec.decoration_placement = DecorationPlacement::Anchored;
        }
        tracing::debug!(name = %self.name, mode = %self.mode, "applied combination");
    }

    /// One-line summary: background, decorations and mode.
    pub fn description(&self) -> String {
        let mut parts = Vec::new();
        if let Some(bg) = self.background.as_deref() {
            let name = elements::find_background(bg).map_or(bg, |d| d.name);
            parts.push(format!("Background: {name}"));
        }
        if !self.decorations.is_empty() {
            let names: Vec<&str> = self
                .decorations
                .iter()
                .map(|k| elements::find_decoration(k).map_or(k.as_str(), |d| d.name))
                .collect();
            parts.push(format!("Decorations: {}", names.join(", ")));
        }
        match self.mode {
            BackgroundMode::Image => parts.push("Mode: Pure Image".to_string()),
            BackgroundMode::ImageTexture => {
                if self.gradient_opacity_pct > 0 {
                    parts.push(format!(
                        "Mode: Image + Gradient ({}%)",
                        self.gradient_opacity_pct
                    ));
                }
                if self.texture_opacity_pct > 0 {
                    parts.push(format!(
                        "Mode: Image + Texture ({}%)",
                        self.texture_opacity_pct
                    ));
                }
            }
            BackgroundMode::GradientTexture => parts.push(format!(
                "Mode: Gradient + Texture ({}%)",
                self.texture_opacity_pct
            )),
            BackgroundMode::Gradient | BackgroundMode::Texture => {}
        }
        parts.join(" \u{2022} ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/combination.rs"]
mod tests;
