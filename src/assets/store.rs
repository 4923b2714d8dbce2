use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::foundation::error::{CardError, CardResult};

/// Where card assets come from.
///
/// Paths are logical and relative (`backgrounds/{key}.svg`, `decorations/{key}.svg`); a missing
/// asset is reported as [`CardError::AssetNotFound`].
pub trait AssetSource {
    fn fetch(&self, path: &str) -> CardResult<Vec<u8>>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn fetch(&self, path: &str) -> CardResult<Vec<u8>> {
        (**self).fetch(path)
    }
}

/// Logical path of a background image.
pub fn background_path(key: &str) -> String {
    format!("backgrounds/{key}.svg")
}

/// Logical path of a decoration sprite.
pub fn decoration_path(key: &str) -> String {
    format!("decorations/{key}.svg")
}

/// Assets read from a directory on disk.
#[derive(Clone, Debug)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssetSource {
    fn fetch(&self, path: &str) -> CardResult<Vec<u8>> {
        let norm = normalize_rel_path(path)?;
        let p = self.root.join(Path::new(&norm));
        std::fs::read(&p).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CardError::asset_not_found(norm)
            } else {
                CardError::asset_load(format!("failed to read asset '{}': {e}", p.display()))
            }
        })
    }
}

/// In-memory assets keyed by normalized path.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetSource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, bytes: impl Into<Vec<u8>>) -> CardResult<()> {
        let norm = normalize_rel_path(path)?;
        self.files.insert(norm, bytes.into());
        Ok(())
    }

    pub fn with(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> CardResult<Self> {
        self.insert(path, bytes)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for MemoryAssetSource {
    fn fetch(&self, path: &str) -> CardResult<Vec<u8>> {
        let norm = normalize_rel_path(path)?;
        self.files
            .get(&norm)
            .cloned()
            .ok_or_else(|| CardError::asset_not_found(norm))
    }
}

/// Normalize and validate asset-root-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> CardResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CardError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(CardError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CardError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// SVG asset checked by `usvg`, kept as markup for inlining.
#[derive(Clone, Debug)]
pub struct PreparedSvg {
    pub width: f32,
    pub height: f32,
    /// Document text starting at the root `<svg` element.
    pub markup: String,
}

pub fn parse_svg(bytes: &[u8]) -> CardResult<PreparedSvg> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| CardError::asset_load(format!("parse svg tree: {e}")))?;
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CardError::asset_load(format!("svg is not utf-8: {e}")))?;
    let start = text
        .find("<svg")
        .ok_or_else(|| CardError::asset_load("svg root element not found"))?;
    let size = tree.size();
    Ok(PreparedSvg {
        width: size.width(),
        height: size.height(),
        markup: text[start..].trim_end().to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
