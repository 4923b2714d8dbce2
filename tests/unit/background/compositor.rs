use super::*;

fn layers(mode: BackgroundMode) -> LayerStack {
    compute_layers(mode, "linear-gradient(red, blue)", &TextureSpec::default(), &ImageSpec::default()).value
}

#[test]
fn visibility_table() {
    let expected = [
        (BackgroundMode::Gradient, [true, false, false]),
        (BackgroundMode::Texture, [false, true, false]),
        (BackgroundMode::Image, [false, false, true]),
        (BackgroundMode::GradientTexture, [true, true, false]),
        (BackgroundMode::ImageTexture, [false, true, true]),
    ];
    for (mode, [g, t, i]) in expected {
        let l = layers(mode);
        assert_eq!(
            [l.gradient_visible(), l.texture_visible(), l.image_visible()],
            [g, t, i],
            "{mode}"
        );
        assert_eq!(l.texture_css().is_some(), t);
        assert_eq!(l.image_filter_css().is_some(), i);
    }
}

#[test]
fn img_tex_passes_opacities_through() {
    let texture = TextureSpec {
        kind: "dots".into(),
        scale: 40,
        opacity_pct: 30.0,
    };
    let image = ImageSpec {
        source: Some("beach".into()),
        opacity_pct: 50.0,
        ..ImageSpec::default()
    };
    let out = compute_layers(BackgroundMode::ImageTexture, "g", &texture, &image);
    assert!(out.is_clean());
    let l = out.value;
    assert!(!l.gradient_visible());
    assert_eq!(l.texture.as_ref().unwrap().opacity_pct, 30.0);
    assert_eq!(l.image.as_ref().unwrap().opacity_pct, 50.0);
    assert_eq!(l.image.unwrap().image_css, "url('backgrounds/beach.svg')");
}

#[test]
fn image_filter_and_vignette_css() {
    let image = ImageSpec {
        blur_px: 2.0,
        brightness_pct: 85.0,
        vignette_px: 15.0,
        ..ImageSpec::default()
    };
    assert_eq!(image.filter_css(), "blur(2px) brightness(0.85)");
    assert_eq!(image.vignette_css(), "inset 0 0 15px 7.5px rgba(0,0,0,.25)");
    assert_eq!(ImageSpec::default().filter_css(), "blur(0px) brightness(1)");
}

#[test]
fn image_sources() {
    let with = |s: &str| ImageSpec {
        source: Some(s.into()),
        ..ImageSpec::default()
    };
    assert_eq!(ImageSpec::default().image_css(), "none");
    assert_eq!(with("forest").image_css(), "url('backgrounds/forest.svg')");
    assert_eq!(with("photos/me.jpg").image_css(), "url('photos/me.jpg')");
    assert_eq!(with("url(\"data:x\")").image_css(), "url(\"data:x\")");
}

#[test]
fn unknown_texture_degrades_to_none() {
    let texture = TextureSpec {
        kind: "plaid".into(),
        ..TextureSpec::default()
    };
    let out = compute_layers(BackgroundMode::Texture, "g", &texture, &ImageSpec::default());
    assert_eq!(out.value.texture_css(), Some("none"));
    assert!(matches!(
        out.warnings.as_slice(),
        [CardError::ConfigurationMissing { kind: "texture", .. }]
    ));
}

#[test]
fn hidden_texture_is_not_resolved() {
    let texture = TextureSpec {
        kind: "plaid".into(),
        ..TextureSpec::default()
    };
    let out = compute_layers(BackgroundMode::Gradient, "g", &texture, &ImageSpec::default());
    assert!(out.is_clean());
}

#[test]
fn out_of_range_opacity_is_clamped() {
    let image = ImageSpec {
        opacity_pct: 140.0,
        ..ImageSpec::default()
    };
    let out = compute_layers(BackgroundMode::Image, "g", &TextureSpec::default(), &image);
    assert_eq!(out.value.image.unwrap().opacity_pct, 100.0);
    assert!(matches!(out.warnings.as_slice(), [CardError::InvalidParameter(_)]));
}

#[test]
fn mode_switch_keeps_hidden_parameters() {
    let mut state = BackgroundState {
        mode: BackgroundMode::ImageTexture,
        ..BackgroundState::default()
    };
    state.texture.opacity_pct = 42.0;
    state.image.blur_px = 3.0;

    state.set_mode(BackgroundMode::Gradient);
    let hidden = state.layers("theme").value;
    assert_eq!(hidden.gradient.as_deref(), Some("theme"));
    assert!(!hidden.texture_visible());

    state.set_mode(BackgroundMode::ImageTexture);
    let back = state.layers("theme").value;
    assert_eq!(back.texture.unwrap().opacity_pct, 42.0);
    assert_eq!(back.image.unwrap().filter_css, "blur(3px) brightness(1)");
}

#[test]
fn mode_names_round_trip_through_serde() {
    let json = serde_json::to_string(&BackgroundMode::ImageTexture).unwrap();
    assert_eq!(json, "\"img+tex\"");
    assert_eq!("GRAD+TEX".parse::<BackgroundMode>().unwrap(), BackgroundMode::GradientTexture);
    assert!("photo".parse::<BackgroundMode>().is_err());
}
