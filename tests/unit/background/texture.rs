use super::*;

#[test]
fn every_kind_is_pure() {
    for kind in TextureKind::ALL {
        assert_eq!(kind.css(50), kind.css(50), "{kind}");
        assert!(!kind.css(50).is_empty());
    }
}

#[test]
fn formulas_use_scale_fractions() {
    assert_eq!(
        TextureKind::Dots.css(40),
        "radial-gradient(circle at 25% 25%, rgba(0,0,0,.08) 12%, transparent 13%) 20px 20px / 40px 40px repeat"
    );
    assert!(TextureKind::Stripes.css(25).contains("12.5px"));
    assert!(TextureKind::Chevron.css(10).contains("2.5px, transparent 2.5px, transparent 5px"));
    assert!(TextureKind::Pluses.css(10).contains("transparent 0 8px, rgba(0,0,0,.06) 8px 9px, transparent 9px 10px"));
}

#[test]
fn noise_ignores_scale() {
    assert_eq!(TextureKind::Noise.css(1), TextureKind::Noise.css(300));
    assert!(TextureKind::Noise.css(1).starts_with("url('data:image/svg+xml;utf8,%3Csvg"));
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(" Grid ".parse::<TextureKind>().unwrap(), TextureKind::Grid);
    assert!(matches!(
        "plaid".parse::<TextureKind>(),
        Err(CardError::ConfigurationMissing { kind: "texture", .. })
    ));
}

#[test]
fn unknown_kind_renders_none_with_warning() {
    let out = texture_css("plaid", 40);
    assert_eq!(out.value, "none");
    assert_eq!(out.warnings.len(), 1);

    let none = texture_css("none", 40);
    assert_eq!(none.value, "none");
    assert!(none.is_clean());
}

#[test]
fn non_positive_scale_is_clamped() {
    for bad in [0, -10] {
        let out = texture_css("grid", bad);
        assert_eq!(out.value, TextureKind::Grid.css(MIN_TEXTURE_SCALE));
        assert!(matches!(
            out.warnings.as_slice(),
            [CardError::InvalidParameter(_)]
        ));
    }
}
