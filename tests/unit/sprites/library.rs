use super::*;
use crate::assets::store::MemoryAssetSource;

fn svg(color: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 50 50" width="50" height="50"><rect width="50" height="50" fill="{color}"/></svg>"#
    )
}

#[test]
fn load_isolates_failures_per_asset() {
    let src = MemoryAssetSource::new()
        .with("decorations/cake.svg", svg("red"))
        .unwrap()
        .with("decorations/hearts.svg", "<not-svg")
        .unwrap()
        .with("decorations/clouds.svg", svg("white"))
        .unwrap();

    let out = SpriteLibrary::load(&src);
    let lib = out.value;
    assert_eq!(lib.len(), 2);
    assert!(lib.contains("cake"));
    assert!(lib.contains("clouds"));

    // every catalog entry except cake misses; hearts is present but broken
    let load_failures = out
        .warnings
        .iter()
        .filter(|w| matches!(w, CardError::AssetLoad(_)))
        .count();
    assert_eq!(load_failures, 1);
    assert_eq!(out.warnings.len(), elements::decorations().len() - 1);
    assert!(out.warnings.iter().all(CardError::is_recoverable));
}

#[test]
fn catalog_metadata_applies_to_known_keys() {
    let mut lib = SpriteLibrary::new();
    lib.insert_svg("balloons", svg("red").as_bytes()).unwrap();
    lib.insert_svg("triangles", svg("red").as_bytes()).unwrap();

    let b = lib.get("balloons").unwrap();
    assert_eq!(b.name, "Balloons");
    assert_eq!(b.default_opacity_pct, 80);
    assert_eq!(b.width, 50.0);

    let t = lib.get("triangles").unwrap();
    assert_eq!(t.name, "Triangles");
    assert_eq!(t.category, Category::Geometric);
    assert_eq!(t.tags, ["triangles"]);
}

#[test]
fn fallback_names_replace_dashes() {
    assert_eq!(display_name("geometric-shapes"), "Geometric shapes");
    assert_eq!(display_name(""), "");
}

#[test]
fn embed_markup_inherits_color() {
    let mut lib = SpriteLibrary::new();
    lib.insert_svg("cake", svg("red").as_bytes()).unwrap();
    let m = lib.get("cake").unwrap().embed_markup();
    assert!(m.starts_with("<svg fill=\"currentColor\" xmlns="));
    assert!(!m.contains("<?xml"));
}

#[test]
fn grouping_and_search() {
    let mut lib = SpriteLibrary::new();
    for key in ["cake", "leaves", "chip"] {
        lib.insert_svg(key, svg("red").as_bytes()).unwrap();
    }
    let groups = lib.by_category();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&Category::Nature][0].key, "leaves");

    let hits: Vec<_> = lib.search("Tech").iter().map(|d| d.key.as_str()).collect();
    assert_eq!(hits, ["chip"]);
    assert_eq!(lib.search("").len(), 3);
    assert!(matches!(
        lib.require("nope"),
        Err(CardError::AssetNotFound { .. })
    ));
}
