use super::*;

fn hex(s: &str) -> ColorHex {
    ColorHex::parse(s).unwrap()
}

#[test]
fn every_builtin_theme_is_valid() {
    for key in ThemeKey::ALL {
        let theme = key.theme();
        theme.validate().unwrap();
        assert_eq!(theme.palette.len(), 5, "{key}");
        assert!(theme.gradient.starts_with("linear-gradient("));
    }
}

#[test]
fn sprite_and_color_wrap_by_index() {
    let theme = Theme::new(["a", "b"], [hex("#fff"), hex("#000")], "none").unwrap();
    let ids: Vec<_> = (0..4).map(|i| theme.sprite_for(i).unwrap()).collect();
    assert_eq!(ids, ["a", "b", "a", "b"]);
    let colors: Vec<_> = (0..4).map(|i| theme.color_for(i).to_string()).collect();
    assert_eq!(colors, ["#fff", "#000", "#fff", "#000"]);
}

#[test]
fn empty_palette_uses_fallback() {
    let theme = Theme::new(["a"], Vec::<ColorHex>::new(), "none").unwrap();
    assert_eq!(theme.color_for(0).as_str(), FALLBACK_PALETTE[0]);
    assert_eq!(theme.color_for(4).as_str(), FALLBACK_PALETTE[1]);
}

#[test]
fn empty_sprites_are_rejected() {
    assert!(Theme::new(Vec::<String>::new(), [hex("#fff")], "none").is_err());
    assert!(Theme::new([" "], [hex("#fff")], "none").is_err());
}

#[test]
fn theme_key_parse_and_fallback() {
    assert_eq!("Birthday".parse::<ThemeKey>().unwrap(), ThemeKey::Birthday);
    let resolved = ThemeKey::resolve("wedding");
    assert_eq!(resolved.value, ThemeKey::Pool);
    assert!(matches!(
        resolved.warnings.as_slice(),
        [CardError::ConfigurationMissing { kind: "theme", .. }]
    ));
}

#[test]
fn backdrop_layers_highlights_over_gradient() {
    let css = ThemeKey::Pool.theme().backdrop_css();
    assert!(css.starts_with("radial-gradient(1200px 800px"));
    assert!(css.ends_with("linear-gradient(180deg,#b3e5ff 0%, #e6f9ff 100%)"));
}

#[test]
fn theme_deserializes_with_defaults() {
    let theme: Theme = serde_json::from_str(r#"{"sprites":["x"]}"#).unwrap();
    assert!(theme.palette.is_empty());
    assert!(!theme.gradient.is_empty());
}
