use crate::{
    catalog::elements::DecorationDef,
    foundation::{
        core::{Affine, ColorHex, Point},
        error::{CardError, WithWarnings},
    },
    random::xorshift::XorShift32,
    theme::model::Theme,
};

/// Horizontal extent of the placement area.
pub const PLACEMENT_WIDTH: f64 = 900.0;
/// Vertical extent of the placement area before the band offset.
pub const PLACEMENT_HEIGHT: f64 = 600.0;
/// Band offset added to odd placement indices.
pub const ODD_BAND_OFFSET: f64 = 100.0;
/// Band offset added to even placement indices.
pub const EVEN_BAND_OFFSET: f64 = 250.0;
/// Smallest accepted caller scale, in percent.
pub const MIN_SCALE_PERCENT: f64 = 1.0;

/// Float animation applied to every placed sprite.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    Off,
    #[default]
    Gentle,
    Lively,
}

impl AnimationMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Some(Self::Off),
            "gentle" => Some(Self::Gentle),
            "lively" => Some(Self::Lively),
            _ => None,
        }
    }

    /// `(base, spread)` in seconds; `None` when animation is off.
    fn duration_range(self) -> Option<(f64, f64)> {
        match self {
            AnimationMode::Off => None,
            AnimationMode::Gentle => Some((8.0, 5.0)),
            AnimationMode::Lively => Some((4.0, 3.0)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One positioned, rotated, scaled and colored sprite.
pub struct SpriteInstance {
    pub sprite_id: String,
    pub position: Point,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub color: ColorHex,
    /// Seconds per float cycle; `0.0` when not animated.
    pub animation_duration_s: f64,
    /// Seconds before the first cycle starts, in `[0, 2)`.
    pub animation_delay_s: f64,
}

impl SpriteInstance {
    pub fn is_animated(&self) -> bool {
        self.animation_duration_s > 0.0
    }

    /// SVG `transform` attribute: `translate(x y) rotate(r) scale(s)`.
    pub fn transform_attr(&self) -> String {
        format!(
            "translate({} {}) rotate({}) scale({})",
            self.position.x, self.position.y, self.rotation_deg, self.scale
        )
    }

    /// Inline style carrying color, opacity and the `floaty` keyframe animation.
    pub fn style_attr(&self) -> String {
        let mut style = format!("color:{}; opacity:{};", self.color, self.opacity);
        if self.is_animated() {
            style.push_str(&format!(
                " animation: floaty {}s ease-in-out {}s infinite;",
                self.animation_duration_s, self.animation_delay_s
            ));
        }
        style
    }

    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.position.to_vec2())
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
    }
}

/// Place `density` sprites for `theme`.
///
/// Per index `i` this draws, in order: x, y, rotation, scale and, when `animation` is not
/// [`AnimationMode::Off`], the cycle duration followed by the start delay. Sprite id and color
/// are chosen by `i` modulo the theme lists and never consume draws. A non-positive or
/// non-finite `scale_percent` is clamped to [`MIN_SCALE_PERCENT`] and reported.
#[tracing::instrument(skip(theme, rng), fields(sprites = theme.sprites.len()))]
pub fn generate_placements(
    theme: &Theme,
    density: usize,
    scale_percent: f64,
    animation: AnimationMode,
    rng: &mut XorShift32,
) -> WithWarnings<Vec<SpriteInstance>> {
    let mut warnings = Vec::new();

    if theme.sprites.is_empty() {
        tracing::warn!("theme has no sprites, nothing to place");
        warnings.push(CardError::configuration_missing("theme sprites", "<empty>"));
        return WithWarnings::new(Vec::new(), warnings);
    }

    let scale_percent = if scale_percent.is_finite() && scale_percent > 0.0 {
        scale_percent
    } else {
        tracing::warn!(scale_percent, "sprite scale must be > 0, clamping");
        warnings.push(CardError::invalid_parameter(format!(
            "sprite scale {scale_percent}% clamped to {MIN_SCALE_PERCENT}%"
        )));
        MIN_SCALE_PERCENT
    };
    let caller_scale = scale_percent / 100.0;

    let mut out = Vec::with_capacity(density);
    for i in 0..density {
        let Some(sprite_id) = theme.sprite_for(i) else {
            break;
        };

        let x = rng.next_f64() * PLACEMENT_WIDTH;
        let band = if i % 2 == 1 {
            ODD_BAND_OFFSET
        } else {
            EVEN_BAND_OFFSET
        };
        let y = rng.next_f64() * PLACEMENT_HEIGHT + band;
        let rotation_deg = rng.next_f64() * 40.0 - 20.0;
        let scale = (0.6 + rng.next_f64() * 0.9) * caller_scale;

        let (animation_duration_s, animation_delay_s) = match animation.duration_range() {
            None => (0.0, 0.0),
            Some((base, spread)) => {
                let duration = base + rng.next_f64() * spread;
                let delay = rng.next_f64() * 2.0;
                (duration, delay)
            }
        };

        out.push(SpriteInstance {
            sprite_id: sprite_id.to_string(),
            position: Point::new(x, y),
            rotation_deg,
            scale,
            opacity: 1.0,
            color: theme.color_for(i),
            animation_duration_s,
            animation_delay_s,
        });
    }

    tracing::debug!(placed = out.len(), "generated sprite placements");
    WithWarnings::new(out, warnings)
}

/// Place catalog decorations at their configured anchors (no randomness).
///
/// Decoration `i` uses anchor `i % anchors.len()` of its own definition, its default scale and
/// rotation, and its default opacity (percent) as opacity.
pub fn place_decorations(decorations: &[&DecorationDef], color: &ColorHex) -> Vec<SpriteInstance> {
    decorations
        .iter()
        .enumerate()
        .filter_map(|(i, def)| {
            if def.anchors.is_empty() {
                return None;
            }
            let (x, y) = def.anchors[i % def.anchors.len()];
            Some(SpriteInstance {
                sprite_id: def.key.to_string(),
                position: Point::new(x, y),
                rotation_deg: def.default_rotation_deg,
                scale: def.default_scale,
                opacity: f64::from(def.default_opacity_pct) / 100.0,
                color: color.clone(),
                animation_duration_s: 0.0,
                animation_delay_s: 0.0,
            })
        })
        .collect()
}

/// Place catalog decorations at random spots, as the auto-random mode does.
///
/// Per decoration this draws x, y, scale variation, rotation and opacity variation, in that
/// order. Positions are whole pixels in `100..800` x `100..900`; opacity is capped at 1.
pub fn scatter_decorations(
    decorations: &[&DecorationDef],
    color: &ColorHex,
    rng: &mut XorShift32,
) -> Vec<SpriteInstance> {
    decorations
        .iter()
        .map(|def| {
            let x = f64::from(rng.int_below(100, 700));
            let y = f64::from(rng.int_below(100, 800));
            let scale = def.default_scale * rng.range_f64(0.7, 1.3);
            let rotation_deg = f64::from(rng.int_below(0, 360));
            let opacity = f64::from(def.default_opacity_pct) * rng.range_f64(0.8, 1.2) / 100.0;
            SpriteInstance {
                sprite_id: def.key.to_string(),
                position: Point::new(x, y),
                rotation_deg,
                scale,
                opacity: opacity.min(1.0),
                color: color.clone(),
                animation_duration_s: 0.0,
                animation_delay_s: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sprites/placement.rs"]
mod tests;
