use std::collections::BTreeMap;

use crate::{
    assets::store::{AssetSource, decoration_path, parse_svg},
    catalog::elements::{self, Category},
    foundation::error::{CardError, CardResult, WithWarnings},
};

/// Decoration files looked up beyond the catalog; a miss here is not reported.
const FOLDER_EXTRAS: &[&str] = &[
    "balloons",
    "confetti",
    "cake",
    "gifts",
    "candles",
    "stars",
    "flowers",
    "hearts",
    "ribbons",
    "clouds",
    "leaves",
    "butterflies",
    "geometric-shapes",
];

/// A decoration whose SVG was fetched and parsed.
#[derive(Clone, Debug)]
pub struct SpriteDef {
    pub key: String,
    pub name: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub default_opacity_pct: u32,
    pub default_scale: f64,
    pub default_rotation_deg: f64,
    pub width: f32,
    pub height: f32,
    svg: String,
}

impl SpriteDef {
    /// Inline SVG that picks up the sprite group's `color`.
    pub fn embed_markup(&self) -> String {
        match self.svg.strip_prefix("<svg") {
            Some(rest) => format!("<svg fill=\"currentColor\"{rest}"),
            None => self.svg.clone(),
        }
    }
}

/// Loaded decoration sprites keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SpriteLibrary {
    defs: BTreeMap<String, SpriteDef>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every catalog decoration, then the well-known extra files.
    ///
    /// Each asset is isolated: a catalog entry that fails to fetch or parse becomes a warning and
    /// the rest still load.
    #[tracing::instrument(skip(source))]
    pub fn load(source: &dyn AssetSource) -> WithWarnings<Self> {
        let mut lib = Self::new();
        let mut warnings = Vec::new();

        for def in elements::decorations() {
            let loaded = source
                .fetch(&decoration_path(def.key))
                .and_then(|bytes| lib.insert_svg(def.key, &bytes));
            if let Err(err) = loaded {
                tracing::warn!(decoration = def.key, error = %err, "skipping decoration");
                warnings.push(err);
            }
        }

        for key in FOLDER_EXTRAS {
            if elements::find_decoration(key).is_ok() {
                continue;
            }
            match source.fetch(&decoration_path(key)) {
                Ok(bytes) => {
                    if let Err(err) = lib.insert_svg(key, &bytes) {
                        tracing::warn!(decoration = *key, error = %err, "skipping decoration");
                        warnings.push(err);
                    }
                }
                Err(err) => tracing::debug!(decoration = *key, error = %err, "no extra decoration"),
            }
        }

        tracing::debug!(loaded = lib.len(), "decoration library ready");
        WithWarnings::new(lib, warnings)
    }

    /// Parse `bytes` and register them under `key`, using catalog metadata when there is any.
    pub fn insert_svg(&mut self, key: &str, bytes: &[u8]) -> CardResult<()> {
        let svg = parse_svg(bytes)?;
        let def = match elements::find_decoration(key) {
            Ok(d) => SpriteDef {
                key: key.to_string(),
                name: d.name.to_string(),
                category: d.category,
                tags: d.tags.iter().map(|t| (*t).to_string()).collect(),
                default_opacity_pct: d.default_opacity_pct,
                default_scale: d.default_scale,
                default_rotation_deg: d.default_rotation_deg,
                width: svg.width,
                height: svg.height,
                svg: svg.markup,
            },
            Err(_) => SpriteDef {
                key: key.to_string(),
                name: display_name(key),
                category: elements::categorize(key),
                tags: vec![key.to_string()],
                default_opacity_pct: 80,
                default_scale: 1.0,
                default_rotation_deg: 0.0,
                width: svg.width,
                height: svg.height,
                svg: svg.markup,
            },
        };
        self.defs.insert(key.to_string(), def);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&SpriteDef> {
        self.defs.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.defs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpriteDef> {
        self.defs.values()
    }

    /// Sprites grouped by category, both levels in sorted order.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&SpriteDef>> {
        let mut out: BTreeMap<Category, Vec<&SpriteDef>> = BTreeMap::new();
        for def in self.defs.values() {
            out.entry(def.category).or_default().push(def);
        }
        out
    }

    /// Case-insensitive match on name or tags.
    pub fn search(&self, query: &str) -> Vec<&SpriteDef> {
        let needle = query.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return self.defs.values().collect();
        }
        self.defs
            .values()
            .filter(|d| {
                d.name.to_ascii_lowercase().contains(&needle)
                    || d.tags.iter().any(|t| t.to_ascii_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Check that a sprite exists before placing it.
    pub fn require(&self, key: &str) -> CardResult<&SpriteDef> {
        self.get(key)
            .ok_or_else(|| CardError::asset_not_found(decoration_path(key)))
    }
}

fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('-', " "),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprites/library.rs"]
mod tests;
