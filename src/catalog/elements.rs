//! Built-in background and decoration definitions.
//!
//! Each definition names the asset by key; the bytes live behind the asset collaborator at
//! `backgrounds/{key}.svg` or `decorations/{key}.svg`.

use crate::foundation::error::{CardError, CardResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Celebration,
    Nature,
    Geometric,
    Technology,
    Modern,
    Decorative,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Celebration => "celebration",
            Category::Nature => "nature",
            Category::Geometric => "geometric",
            Category::Technology => "technology",
            Category::Modern => "modern",
            Category::Decorative => "decorative",
        }
    }
}

/// A full-card background image and the image-layer settings it looks best with.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundDef {
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub default_opacity_pct: u32,
    pub default_blur_px: u32,
    pub default_brightness_pct: u32,
    pub default_vignette_px: u32,
}

/// A decoration sprite with its default look and fixed anchor positions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DecorationDef {
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub default_opacity_pct: u32,
    pub default_scale: f64,
    pub default_rotation_deg: f64,
    pub anchors: &'static [(f64, f64)],
}

impl DecorationDef {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_ascii_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.contains(needle))
    }
}

const BACKGROUNDS: &[BackgroundDef] = &[
    BackgroundDef {
        key: "beach",
        name: "Beach Scene",
        category: Category::Nature,
        tags: &["beach", "ocean", "summer", "relaxing"],
        default_opacity_pct: 100,
        default_blur_px: 0,
        default_brightness_pct: 100,
        default_vignette_px: 20,
    },
    BackgroundDef {
        key: "forest",
        name: "Forest Scene",
        category: Category::Nature,
        tags: &["forest", "trees", "nature", "peaceful"],
        default_opacity_pct: 100,
        default_blur_px: 0,
        default_brightness_pct: 100,
        default_vignette_px: 15,
    },
    BackgroundDef {
        key: "abstract",
        name: "Abstract Geometric",
        category: Category::Modern,
        tags: &["abstract", "geometric", "modern", "artistic"],
        default_opacity_pct: 100,
        default_blur_px: 0,
        default_brightness_pct: 100,
        default_vignette_px: 0,
    },
];

macro_rules! decoration {
    ($key:literal, $name:literal, $cat:ident, [$($tag:literal),*], $op:literal, $scale:literal, [$($a:expr),*]) => {
        DecorationDef {
            key: $key,
            name: $name,
            category: Category::$cat,
            tags: &[$($tag),*],
            default_opacity_pct: $op,
            default_scale: $scale,
            default_rotation_deg: 0.0,
            anchors: &[$($a),*],
        }
    };
}

const DECORATIONS: &[DecorationDef] = &[
    decoration!("balloons", "Balloons", Celebration, ["balloons", "party", "celebration", "fun"], 80, 1.0,
        [(100.0, 200.0), (700.0, 150.0), (400.0, 100.0)]),
    decoration!("confetti", "Confetti", Celebration, ["confetti", "party", "celebration", "fun"], 85, 0.9,
        [(150.0, 150.0), (650.0, 100.0), (350.0, 200.0)]),
    decoration!("gifts", "Gifts", Celebration, ["gifts", "party", "celebration", "birthday"], 80, 1.0,
        [(200.0, 300.0), (600.0, 250.0), (400.0, 350.0)]),
    decoration!("cake", "Cake", Celebration, ["cake", "birthday", "celebration"], 85, 0.9,
        [(250.0, 300.0), (550.0, 250.0), (400.0, 350.0)]),
    decoration!("candles", "Candles", Celebration, ["candles", "birthday", "light"], 90, 0.8,
        [(300.0, 200.0), (500.0, 150.0), (400.0, 250.0)]),
    decoration!("ribbons", "Ribbons", Celebration, ["ribbons", "gift", "celebration"], 80, 1.0,
        [(150.0, 200.0), (650.0, 150.0), (400.0, 100.0)]),
    decoration!("hearts", "Hearts", Celebration, ["hearts", "love", "wedding"], 85, 0.9,
        [(200.0, 250.0), (600.0, 200.0), (400.0, 300.0)]),
    decoration!("stars", "Stars", Celebration, ["stars", "night", "sparkle"], 90, 0.9,
        [(200.0, 150.0), (650.0, 200.0), (450.0, 100.0)]),
    decoration!("sparkles", "Sparkles", Celebration, ["sparkles", "shine", "magic"], 90, 0.8,
        [(250.0, 150.0), (600.0, 100.0), (400.0, 200.0)]),
    decoration!("flowers", "Flowers", Nature, ["flowers", "spring", "garden"], 75, 0.8,
        [(150.0, 300.0), (600.0, 250.0), (300.0, 400.0)]),
    decoration!("leaves", "Leaves", Nature, ["leaves", "autumn", "nature"], 80, 0.9,
        [(200.0, 300.0), (550.0, 250.0), (350.0, 350.0)]),
    decoration!("butterflies", "Butterflies", Nature, ["butterflies", "spring", "nature"], 80, 0.8,
        [(250.0, 200.0), (550.0, 150.0), (400.0, 250.0)]),
    decoration!("geometric-shapes", "Geometric Shapes", Geometric, ["shapes", "geometric", "modern"], 80, 1.0,
        [(200.0, 200.0), (600.0, 150.0), (400.0, 300.0)]),
    decoration!("dots", "Dots", Geometric, ["dots", "pattern", "minimal"], 75, 1.0,
        [(150.0, 200.0), (650.0, 150.0), (400.0, 250.0)]),
    decoration!("lines", "Lines", Geometric, ["lines", "pattern", "minimal"], 80, 1.0,
        [(200.0, 200.0), (600.0, 150.0), (400.0, 300.0)]),
    decoration!("circuits", "Circuits", Technology, ["circuits", "tech", "digital"], 80, 0.9,
        [(250.0, 200.0), (550.0, 150.0), (400.0, 250.0)]),
    decoration!("chip", "Chip", Technology, ["chip", "tech", "digital"], 80, 0.9,
        [(200.0, 200.0), (600.0, 150.0), (400.0, 250.0)]),
    decoration!("network", "Network", Technology, ["network", "tech", "connection"], 80, 0.9,
        [(250.0, 200.0), (550.0, 150.0), (400.0, 250.0)]),
];

pub fn backgrounds() -> &'static [BackgroundDef] {
    BACKGROUNDS
}

pub fn decorations() -> &'static [DecorationDef] {
    DECORATIONS
}

pub fn find_background(key: &str) -> CardResult<&'static BackgroundDef> {
    BACKGROUNDS
        .iter()
        .find(|b| b.key == key)
        .ok_or_else(|| CardError::configuration_missing("background", key))
}

pub fn find_decoration(key: &str) -> CardResult<&'static DecorationDef> {
    DECORATIONS
        .iter()
        .find(|d| d.key == key)
        .ok_or_else(|| CardError::configuration_missing("decoration", key))
}

/// Distinct decoration categories, in declaration order.
pub fn decoration_categories() -> Vec<Category> {
    let mut out = Vec::new();
    for d in DECORATIONS {
        if !out.contains(&d.category) {
            out.push(d.category);
        }
    }
    out
}

pub fn decorations_in(category: Category) -> impl Iterator<Item = &'static DecorationDef> {
    DECORATIONS.iter().filter(move |d| d.category == category)
}

/// Case-insensitive search over decoration names and tags.
pub fn search_decorations(query: &str) -> Vec<&'static DecorationDef> {
    let needle = query.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    DECORATIONS.iter().filter(|d| d.matches(&needle)).collect()
}

/// Category guess for a decoration key that has no catalog entry.
pub fn categorize(key: &str) -> Category {
    match key {
        "balloons" | "confetti" | "cake" | "gifts" | "candles" => Category::Celebration,
        "stars" | "clouds" | "leaves" | "butterflies" => Category::Nature,
        "geometric-shapes" | "dots" | "lines" | "triangles" => Category::Geometric,
        _ => Category::Decorative,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/elements.rs"]
mod tests;
