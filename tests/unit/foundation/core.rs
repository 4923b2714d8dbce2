use super::*;

#[test]
fn color_hex_accepts_short_long_and_alpha_forms() {
    assert_eq!(ColorHex::parse("#FFF").unwrap().as_str(), "#fff");
    assert_eq!(ColorHex::parse(" #2ec5ff ").unwrap().as_str(), "#2ec5ff");
    assert_eq!(ColorHex::parse("#00000080").unwrap().as_str(), "#00000080");
}

#[test]
fn color_hex_rejects_malformed_values() {
    assert!(ColorHex::parse("fff").is_err());
    assert!(ColorHex::parse("#ffff").is_err());
    assert!(ColorHex::parse("#ggg").is_err());
    assert!(ColorHex::parse("").is_err());
}

#[test]
fn color_hex_serde_validates() {
    let c: ColorHex = serde_json::from_str("\"#ABCDEF\"").unwrap();
    assert_eq!(c.to_string(), "#abcdef");
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#abcdef\"");
    assert!(serde_json::from_str::<ColorHex>("\"red\"").is_err());
}

#[test]
fn canvas_default_and_validation() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (900, 1350));
    assert!(c.validate().is_ok());
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
}
