use super::*;

fn spec(style: &str, variant: &str) -> EdgeSpec {
    EdgeSpec {
        style: style.into(),
        variant: variant.into(),
        ..EdgeSpec::default()
    }
}

#[test]
fn defaults_draw_nothing() {
    let d = EdgeSpec::default();
    assert_eq!(d.style, "none");
    assert_eq!(d.thickness, 3.0);
    assert_eq!(d.opacity, 0.8);
    assert_eq!(d.color.as_str(), "#000000");
    let out = d.render_svg(Canvas::default());
    assert!(out.value.is_none());
    assert!(out.is_clean());
}

#[test]
fn layer_has_four_sides_and_a_border_rect() {
    let out = spec("scalloped", "soft").render_svg(Canvas::default());
    assert!(out.is_clean());
    let svg = out.value.unwrap();
    assert!(svg.starts_with("<svg class=\"edge-layer\""));
    assert!(svg.contains("viewBox=\"0 0 900 1350\""));
    assert_eq!(svg.matches("<path ").count(), 4);
    assert!(svg.contains(
        "<rect x=\"0\" y=\"0\" width=\"900\" height=\"1350\" fill=\"none\" stroke=\"#000000\" stroke-width=\"3\" opacity=\"0.8\"/>"
    ));
}

#[test]
fn unknown_style_is_a_warning_not_an_error() {
    let out = spec("curly", "default").render_svg(Canvas::default());
    assert!(out.value.is_none());
    assert!(matches!(
        out.warnings.as_slice(),
        [CardError::ConfigurationMissing { kind: "edge style", .. }]
    ));
}

#[test]
fn out_of_range_opacity_is_clamped() {
    let mut s = spec("border", "default");
    s.opacity = 4.0;
    let out = s.render_svg(Canvas::default());
    assert!(out.value.unwrap().contains("opacity=\"1\""));
    assert_eq!(out.warnings.len(), 1);
}
