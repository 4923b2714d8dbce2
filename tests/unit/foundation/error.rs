use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(
        CardError::asset_load("x")
            .to_string()
            .contains("asset load failure:")
    );
    assert!(
        CardError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        CardError::configuration_missing("texture", "plaid").to_string(),
        "missing configuration: unknown texture 'plaid'"
    );
    assert_eq!(
        CardError::asset_not_found("decorations/cake.svg").to_string(),
        "asset not found: 'decorations/cake.svg'"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_recoverable());
}

#[test]
fn degradations_are_recoverable() {
    assert!(CardError::configuration_missing("edge style", "lace").is_recoverable());
    assert!(CardError::invalid_parameter("scale").is_recoverable());
    assert!(CardError::asset_not_found("a.svg").is_recoverable());
    assert!(!CardError::validation("canvas").is_recoverable());
}

#[test]
fn with_warnings_drain_moves_warnings() {
    let w = WithWarnings::new(3, vec![CardError::invalid_parameter("a")]);
    assert!(!w.is_clean());

    let mut sink = Vec::new();
    let v = w.map(|v| v * 2).drain_into(&mut sink);
    assert_eq!(v, 6);
    assert_eq!(sink.len(), 1);
    assert!(WithWarnings::clean(()).is_clean());
}
