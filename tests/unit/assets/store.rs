use super::*;

const DOT: &str = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20"><circle cx="10" cy="10" r="8"/></svg>
"#;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.svg").unwrap(), "a/b.svg");
    assert_eq!(normalize_rel_path("a\\b.svg").unwrap(), "a/b.svg");
    assert_eq!(normalize_rel_path("./a//b.svg").unwrap(), "a/b.svg");
    assert!(normalize_rel_path("../x.svg").is_err());
    assert!(normalize_rel_path("/abs.svg").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn logical_paths() {
    assert_eq!(background_path("beach"), "backgrounds/beach.svg");
    assert_eq!(decoration_path("cake"), "decorations/cake.svg");
}

#[test]
fn memory_source_hits_and_misses() {
    let src = MemoryAssetSource::new()
        .with("decorations\\cake.svg", DOT)
        .unwrap();
    assert_eq!(src.len(), 1);
    assert_eq!(src.fetch("decorations/cake.svg").unwrap(), DOT.as_bytes());
    let err = src.fetch("decorations/pie.svg").unwrap_err();
    assert!(matches!(err, CardError::AssetNotFound { ref path } if path == "decorations/pie.svg"));
    assert!(err.is_recoverable());
}

#[test]
fn fs_source_reports_missing_files() {
    let dir = std::env::temp_dir().join(format!("cardsmith-assets-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("decorations")).unwrap();
    std::fs::write(dir.join("decorations/dot.svg"), DOT).unwrap();

    let src = FsAssetSource::new(&dir);
    assert_eq!(src.fetch("decorations/dot.svg").unwrap(), DOT.as_bytes());
    assert!(matches!(
        src.fetch("decorations/none.svg"),
        Err(CardError::AssetNotFound { .. })
    ));
    assert!(matches!(
        src.fetch("../etc/passwd"),
        Err(CardError::Validation(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn parse_svg_strips_prolog_and_reads_size() {
    let svg = parse_svg(DOT.as_bytes()).unwrap();
    assert_eq!(svg.width, 40.0);
    assert_eq!(svg.height, 20.0);
    assert!(svg.markup.starts_with("<svg"));
    assert!(svg.markup.ends_with("</svg>"));
}

#[test]
fn parse_svg_rejects_garbage() {
    assert!(matches!(
        parse_svg(b"not an svg"),
        Err(CardError::AssetLoad(_))
    ));
}
