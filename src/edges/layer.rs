use std::fmt::Write as _;

use rand::Rng;

use crate::{
    edges::{path::build_side_paths_with, style::resolve_edge},
    foundation::{
        core::{Canvas, ColorHex},
        error::{CardError, WithWarnings},
        fmt::escape_attr,
    },
};

/// Border settings as chosen by the user.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EdgeSpec {
    pub style: String,
    pub variant: String,
    pub thickness: f64,
    pub opacity: f64,
    pub color: ColorHex,
}

impl Default for EdgeSpec {
    fn default() -> Self {
        Self {
            style: "none".to_string(),
            variant: "default".to_string(),
            thickness: 3.0,
            opacity: 0.8,
            color: ColorHex::black(),
        }
    }
}

impl EdgeSpec {
    /// The SVG edge layer, or `None` when no border is drawn.
    pub fn render_svg(&self, canvas: Canvas) -> WithWarnings<Option<String>> {
        self.render_svg_with(canvas, &mut rand::rng())
    }

    pub fn render_svg_with<R: Rng + ?Sized>(
        &self,
        canvas: Canvas,
        rng: &mut R,
    ) -> WithWarnings<Option<String>> {
        let mut warnings = Vec::new();
        let Some((style, variant)) =
            resolve_edge(&self.style, &self.variant).drain_into(&mut warnings)
        else {
            return WithWarnings::new(None, warnings);
        };

        let opacity = if (0.0..=1.0).contains(&self.opacity) {
            self.opacity
        } else {
            let clamped = if self.opacity.is_nan() { 1.0 } else { self.opacity.clamp(0.0, 1.0) };
            tracing::warn!(opacity = self.opacity, clamped, "edge opacity out of range");
            warnings.push(CardError::invalid_parameter(format!(
                "edge opacity must be within 0..=1, got {}",
                self.opacity
            )));
            clamped
        };
        let thickness = if self.thickness.is_finite() && self.thickness >= 0.0 {
            self.thickness
        } else {
            tracing::warn!(thickness = self.thickness, "edge thickness clamped to 0");
            warnings.push(CardError::invalid_parameter(format!(
                "edge thickness must be >= 0, got {}",
                self.thickness
            )));
            0.0
        };

        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let Some(sides) = build_side_paths_with(style, variant, w, h, rng) else {
            return WithWarnings::new(None, warnings);
        };

        let color = escape_attr(self.color.as_str());
        let mut svg = format!(
            "<svg class=\"edge-layer\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"none\">"
        );
        for side in &sides {
            let _ = write!(
                svg,
                "<path d=\"{}\" fill=\"{color}\" opacity=\"{opacity}\" stroke=\"{color}\" stroke-width=\"{thickness}\" stroke-linejoin=\"round\"/>",
                side.to_svg()
            );
        }
        let _ = write!(
            svg,
            "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{thickness}\" opacity=\"{opacity}\"/></svg>"
        );

        tracing::debug!(style = %style, variant = %variant, "edge layer built");
        WithWarnings::new(Some(svg), warnings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edges/layer.rs"]
mod tests;
