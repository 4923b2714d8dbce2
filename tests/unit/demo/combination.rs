use super::*;

#[test]
fn builtin_slides_reference_catalog_entries() {
    let slides = builtin_combinations();
    assert_eq!(slides.len(), 11);
    for c in &slides {
        if let Some(bg) = &c.background {
            elements::find_background(bg).unwrap();
        }
        for d in &c.decorations {
            elements::find_decoration(d).unwrap();
        }
    }
    assert_eq!(slides[0].name, "Pure Beach Background");
    assert_eq!(slides[5].texture_kind, Some(TextureKind::Dots));
    assert_eq!(slides[5].texture_scale, Some(80));
}

#[test]
fn apply_loads_background_and_decorations() {
    let mut spec = CardSpec::default();
    spec.background.texture.opacity_pct = 12.0;
    spec.decoration_placement = DecorationPlacement::Scattered;
    let slides = builtin_combinations();

    slides[0].apply(&mut spec);
    assert_eq!(spec.background.mode, BackgroundMode::Image);
    assert_eq!(spec.background.image.source.as_deref(), Some("beach"));
    assert_eq!(spec.background.image.vignette_px, 20.0);
    // no texture in this preset: previous texture settings survive
    assert_eq!(spec.background.texture.opacity_pct, 12.0);
    assert_eq!(spec.decorations, ["balloons"]);
    assert_eq!(spec.decoration_placement, DecorationPlacement::Anchored);

    slides[6].apply(&mut spec);
    assert_eq!(spec.background.texture.kind, "grid");
    assert_eq!(spec.background.texture.scale, 120);
    assert_eq!(spec.background.texture.opacity_pct, 35.0);
}

#[test]
fn descriptions_follow_the_mode() {
    let slides = builtin_combinations();
    assert_eq!(
        slides[0].description(),
        "Background: Beach Scene \u{2022} Decorations: Balloons \u{2022} Mode: Pure Image"
    );
    assert!(slides[9].description().ends_with(
        "Mode: Image + Gradient (40%) \u{2022} Mode: Image + Texture (50%)"
    ));
    assert!(slides[7].description().starts_with("Decorations: Balloons, Flowers"));
}

#[test]
fn random_combinations_stay_in_range() {
    let mut rng = XorShift32::new(2024);
    for serial in 0..200 {
        let c = Combination::random(&mut rng, serial);
        assert_eq!(c.name, format!("Random Combination {serial}"));
        assert!(RANDOM_MODES.contains(&c.mode));
        assert!((1..=3).contains(&c.decorations.len()));
        assert!((60..100).contains(&c.image_opacity_pct));
        assert!(c.image_blur_px < 5);
        assert!((85..115).contains(&c.image_brightness_pct));
        assert!(c.image_vignette_px < 30);
        assert!((50..150).contains(&c.texture_scale.unwrap()));
        match c.mode {
            BackgroundMode::GradientTexture => {
                assert!((20..70).contains(&c.texture_opacity_pct));
                assert_eq!(c.gradient_opacity_pct, 0);
            }
            BackgroundMode::ImageTexture => {
                assert_eq!(c.texture_opacity_pct, 0);
                assert!((30..70).contains(&c.gradient_opacity_pct));
            }
            _ => {
                assert_eq!(c.texture_opacity_pct, 0);
                assert_eq!(c.gradient_opacity_pct, 0);
            }
        }
    }
}

#[test]
fn random_is_reproducible_per_seed() {
    let a = Combination::random(&mut XorShift32::new(8), 1);
    let b = Combination::random(&mut XorShift32::new(8), 1);
    assert_eq!(a, b);
}
