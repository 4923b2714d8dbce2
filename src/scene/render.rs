use std::{collections::BTreeMap, fmt::Write as _};

use rand::Rng;

use crate::{
    background::compositor::LayerStack,
    catalog::elements::{self, DecorationDef},
    foundation::{
        core::{Canvas, ColorHex},
        error::WithWarnings,
        fmt::{escape_attr, escape_text},
    },
    random::xorshift::{RngState, XorShift32},
    scene::model::{CardSpec, CardText, DecorationPlacement},
    sprites::{
        library::SpriteLibrary,
        placement::{SpriteInstance, generate_placements, place_decorations, scatter_decorations},
    },
    theme::model::{Theme, ThemeKey},
};

/// Half-size of the stand-in symbol used for sprites without artwork.
const PLACEHOLDER_RADIUS: f64 = 20.0;

/// Artwork for one sprite id, drawn centered on the sprite origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolDef {
    pub width: f64,
    pub height: f64,
    pub markup: String,
}

impl SymbolDef {
    fn placeholder() -> Self {
        let d = PLACEHOLDER_RADIUS * 2.0;
        Self {
            width: d,
            height: d,
            markup: format!(
                "<circle cx=\"{PLACEHOLDER_RADIUS}\" cy=\"{PLACEHOLDER_RADIUS}\" r=\"{}\" fill=\"currentColor\"/>",
                PLACEHOLDER_RADIUS * 0.8
            ),
        }
    }
}

/// Everything needed to draw a card; produced by [`render_card`].
#[derive(Clone, Debug)]
pub struct CardRender {
    pub canvas: Canvas,
    pub theme_key: ThemeKey,
    pub theme: Theme,
    /// RNG state before the first placement draw.
    pub seed: RngState,
    pub sprites: Vec<SpriteInstance>,
    pub decorations: Vec<SpriteInstance>,
    pub layers: LayerStack,
    pub edge_svg: Option<String>,
    pub text: CardText,
    pub accent: ColorHex,
    pub accent2: ColorHex,
    pub symbols: BTreeMap<String, SymbolDef>,
}

/// Compute a card: theme, placements, background layers and the edge layer.
///
/// Sprite placements, then scattered decorations, consume `rng`; the torn edge uses ambient
/// randomness.
pub fn render_card(
    spec: &CardSpec,
    rng: &mut XorShift32,
    library: &SpriteLibrary,
) -> WithWarnings<CardRender> {
    render_card_with(spec, rng, library, &mut rand::rng())
}

#[tracing::instrument(skip_all, fields(theme = %spec.theme, density = spec.sprites.density))]
pub fn render_card_with<R: Rng + ?Sized>(
    spec: &CardSpec,
    rng: &mut XorShift32,
    library: &SpriteLibrary,
    edge_rng: &mut R,
) -> WithWarnings<CardRender> {
    let mut warnings = Vec::new();

    let theme_key = ThemeKey::resolve(&spec.theme).drain_into(&mut warnings);
    let theme = match (theme_key, &spec.custom_theme) {
        (ThemeKey::Custom, Some(custom)) => custom.clone(),
        _ => theme_key.theme(),
    };

    let seed = rng.snapshot();
    let sprites = generate_placements(
        &theme,
        spec.sprites.density,
        spec.sprites.scale_pct,
        spec.sprites.animation,
        rng,
    )
    .drain_into(&mut warnings);

    let mut picked: Vec<&DecorationDef> = Vec::new();
    for key in &spec.decorations {
        match elements::find_decoration(key) {
            Ok(def) => picked.push(def),
            Err(err) => {
                tracing::warn!(decoration = %key, "unknown decoration, skipping");
                warnings.push(err);
            }
        }
    }
    let decorations = match spec.decoration_placement {
        DecorationPlacement::Anchored => place_decorations(&picked, &spec.accent),
        DecorationPlacement::Scattered => scatter_decorations(&picked, &spec.accent, rng),
    };

    let layers = spec
        .background
        .layers(&theme.backdrop_css())
        .drain_into(&mut warnings);
    let edge_svg = spec
        .edge
        .render_svg_with(spec.canvas, edge_rng)
        .drain_into(&mut warnings);

    let mut symbols = BTreeMap::new();
    for s in sprites.iter().chain(&decorations) {
        if symbols.contains_key(&s.sprite_id) {
            continue;
        }
        let symbol = match library.get(&s.sprite_id) {
            Some(def) => SymbolDef {
                width: f64::from(def.width),
                height: f64::from(def.height),
                markup: def.embed_markup(),
            },
            None => {
                tracing::debug!(sprite = %s.sprite_id, "no artwork loaded, using placeholder");
                SymbolDef::placeholder()
            }
        };
        symbols.insert(s.sprite_id.clone(), symbol);
    }

    tracing::debug!(
        sprites = sprites.len(),
        decorations = decorations.len(),
        warnings = warnings.len(),
        "card rendered"
    );

    WithWarnings::new(
        CardRender {
            canvas: spec.canvas,
            theme_key,
            theme,
            seed,
            sprites,
            decorations,
            layers,
            edge_svg,
            text: spec.text.clone(),
            accent: spec.accent.clone(),
            accent2: spec.accent2.clone(),
            symbols,
        },
        warnings,
    )
}

fn symbol_id(sprite_id: &str) -> String {
    let safe: String = sprite_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("sprite-{safe}")
}

impl CardRender {
    /// The sprite layer as a standalone SVG element.
    pub fn sprites_svg(&self) -> String {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let mut out = format!(
            "<svg class=\"layer sprites\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\"><defs>"
        );
        for (id, sym) in &self.symbols {
            let _ = write!(
                out,
                "<symbol id=\"{}\" viewBox=\"0 0 {} {}\">{}</symbol>",
                symbol_id(id),
                sym.width,
                sym.height,
                sym.markup
            );
        }
        out.push_str("</defs>");
        for s in self.decorations.iter().chain(&self.sprites) {
            let Some(sym) = self.symbols.get(&s.sprite_id) else {
                continue;
            };
            let _ = write!(
                out,
                "<g transform=\"{}\"><g class=\"sprite\" style=\"{}\"><use href=\"#{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></g></g>",
                s.transform_attr(),
                escape_attr(&s.style_attr()),
                symbol_id(&s.sprite_id),
                -sym.width / 2.0,
                -sym.height / 2.0,
                sym.width,
                sym.height
            );
        }
        out.push_str("</svg>");
        out
    }

    fn text_html(&self) -> String {
        let t = &self.text;
        let mut out = String::from("<div class=\"layer text\">");
        let mut block = |tag: &str, class: &str, value: &str| {
            if !value.trim().is_empty() {
                let _ = write!(out, "<{tag} class=\"{class}\">{}</{tag}>", escape_text(value.trim()));
            }
        };
        block("div", "pill", &t.pill);
        block("h1", "title", &t.title);
        block("p", "subtitle", &t.subtitle);
        block("p", "names", &t.names);
        block("p", "date", &t.date);
        block("p", "time", &t.time);
        block("p", "location", &t.location);
        block("p", "rsvp", &t.rsvp);
        out.push_str("</div>");
        out
    }

    /// A standalone HTML preview: stage with background, sprites, edge and text layers.
    pub fn to_html(&self) -> String {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let title = if self.text.title.trim().is_empty() {
            "Invitation".to_string()
        } else {
            escape_text(self.text.title.trim())
        };

        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n\
:root {{ --accent: {accent}; --accent-2: {accent2}; }}\n\
body {{ margin: 0; display: flex; justify-content: center; background: #e9ecef; }}\n\
.stage {{ position: relative; width: {w}px; height: {h}px; overflow: hidden; font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; }}\n\
.layer {{ position: absolute; inset: 0; }}\n\
.layer.photo {{ background-size: cover; background-position: center; }}\n\
.layer.edge svg {{ width: 100%; height: 100%; pointer-events: none; }}\n\
.sprite {{ transform-box: fill-box; transform-origin: center; }}\n\
@keyframes floaty {{ 0%, 100% {{ transform: translateY(0); }} 50% {{ transform: translateY(-12px); }} }}\n\
.text {{ display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; gap: 12px; }}\n\
.pill {{ padding: 6px 16px; border-radius: 999px; background: var(--accent); color: #fff; }}\n\
.title {{ margin: 0; font-size: 64px; color: var(--accent); }}\n\
.names {{ font-size: 40px; color: var(--accent-2); }}\n\
.text p {{ margin: 0; }}\n\
@media print {{ body {{ background: none; }} }}\n\
</style>\n</head>\n<body>\n<div class=\"stage\">\n",
            accent = self.accent,
            accent2 = self.accent2,
        );

        if let Some(gradient) = &self.layers.gradient {
            let _ = writeln!(
                html,
                "<div class=\"layer bg\" style=\"background: {}\"></div>",
                escape_attr(gradient)
            );
        }
        if let Some(image) = &self.layers.image {
            let _ = writeln!(
                html,
                "<div class=\"layer photo\" style=\"background-image: {}; opacity: {}; filter: {}; box-shadow: {}\"></div>",
                escape_attr(&image.image_css),
                image.opacity_pct / 100.0,
                image.filter_css,
                image.vignette_css
            );
        }
        if let Some(texture) = &self.layers.texture {
            let _ = writeln!(
                html,
                "<div class=\"layer texture\" style=\"background: {}; opacity: {}\"></div>",
                escape_attr(&texture.css),
                texture.opacity_pct / 100.0
            );
        }
        html.push_str(&self.sprites_svg());
        html.push('\n');
        if let Some(edge) = &self.edge_svg {
            let _ = writeln!(html, "<div class=\"layer edge\">{edge}</div>");
        }
        if !self.text.is_empty() {
            html.push_str(&self.text_html());
            html.push('\n');
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
