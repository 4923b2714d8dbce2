use std::time::Duration;

use crate::{
    background::{compositor::BackgroundMode, texture::TextureKind},
    catalog::elements,
    demo::{
        combination::{RANDOM_MODES, RANDOM_TEXTURES, pick_decorations},
        timer::IntervalTimer,
    },
    random::xorshift::XorShift32,
    scene::model::{CardSpec, DecorationPlacement},
};

/// Time between two random loads while auto-random is on.
pub const AUTO_RANDOM_PERIOD: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RandomTexture {
    pub kind: TextureKind,
    pub opacity_pct: u32,
    pub scale: i32,
}

/// One "random elements" draw: background, 1-2 decorations, mode and layer settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RandomElements {
    pub background: String,
    pub decorations: Vec<String>,
    pub mode: BackgroundMode,
    pub image_opacity_pct: u32,
    pub image_blur_px: u32,
    pub image_brightness_pct: u32,
    pub image_vignette_px: u32,
    /// Present when the mode shows a texture.
    pub texture: Option<RandomTexture>,
}

impl RandomElements {
    /// Draws: background, decoration count and picks, mode, image opacity, blur, brightness,
    /// vignette and, for texture modes, texture kind, opacity and scale.
    pub fn draw(rng: &mut XorShift32) -> Self {
        let backgrounds = elements::backgrounds();
        let background = backgrounds[rng.index(backgrounds.len())].key.to_string();
        let decorations = pick_decorations(rng, 2);
        let mode = RANDOM_MODES[rng.index(RANDOM_MODES.len())];

        let image_opacity_pct = rng.int_below(60, 40);
        let image_blur_px = rng.int_below(0, 5);
        let image_brightness_pct = rng.int_below(85, 30);
        let image_vignette_px = rng.int_below(0, 30);

        let texture = mode.shows_texture().then(|| {
            let kind = RANDOM_TEXTURES[rng.index(RANDOM_TEXTURES.len())];
            let opacity_pct = rng.int_below(20, 50);
            let scale = rng.int_below(50, 100) as i32;
            RandomTexture {
                kind,
                opacity_pct,
                scale,
            }
        });

        Self {
            background,
            decorations,
            mode,
            image_opacity_pct,
            image_blur_px,
            image_brightness_pct,
            image_vignette_px,
            texture,
        }
    }

    pub fn apply(&self, spec: &mut CardSpec) {
        let bg = &mut spec.background;
        bg.set_mode(self.mode);
        bg.image.source = Some(self.background.clone());
        bg.image.opacity_pct = f64::from(self.image_opacity_pct);
        bg.image.blur_px = f64::from(self.image_blur_px);
        bg.image.brightness_pct = f64::from(self.image_brightness_pct);
        bg.image.vignette_px = f64::from(self.image_vignette_px);
        if let Some(t) = &self.texture {
            bg.texture.kind = t.kind.as_str().to_string();
            bg.texture.opacity_pct = f64::from(t.opacity_pct);
            bg.texture.scale = t.scale;
        }
        spec.decorations = self.decorations.clone();
        spec.decoration_placement = DecorationPlacement::Scattered;
    }
}

/// Toggleable periodic random loader.
#[derive(Clone, Debug)]
pub struct AutoRandom {
    timer: IntervalTimer,
}

impl Default for AutoRandom {
    fn default() -> Self {
        Self {
            timer: IntervalTimer::new(AUTO_RANDOM_PERIOD),
        }
    }
}

impl AutoRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn start(&mut self, now: Duration) {
        tracing::debug!(period_s = AUTO_RANDOM_PERIOD.as_secs(), "auto-random started");
        self.timer.start(now);
    }

    pub fn stop(&mut self) {
        if self.timer.is_running() {
            tracing::debug!("auto-random stopped");
        }
        self.timer.stop();
    }

    /// Flip between running and stopped; returns the new state.
    pub fn toggle(&mut self, now: Duration) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_running()
    }

    /// Load new random elements into `spec` when the period elapsed.
    pub fn tick(
        &mut self,
        now: Duration,
        rng: &mut XorShift32,
        spec: &mut CardSpec,
    ) -> Option<RandomElements> {
        if !self.timer.poll(now) {
            return None;
        }
        let picked = RandomElements::draw(rng);
        picked.apply(spec);
        Some(picked)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/auto_random.rs"]
mod tests;
