use crate::foundation::error::{CardError, CardResult};

pub use kurbo::{Affine, Point};

/// Logical drawing surface of a card, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        // 2:3 portrait, the size every built-in asset is drawn for.
        Self {
            width: 900,
            height: 1350,
        }
    }
}

impl Canvas {
    pub fn validate(self) -> CardResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CardError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }
}

/// A CSS hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`), stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorHex(String);

impl ColorHex {
    pub fn parse(s: &str) -> CardResult<Self> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Err(CardError::validation(format!(
                "color '{s}' must start with '#'"
            )));
        };
        if !matches!(hex.len(), 3 | 6 | 8) {
            return Err(CardError::validation(format!(
                "color '{s}' must have 3, 6 or 8 hex digits"
            )));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CardError::validation(format!(
                "color '{s}' contains non-hex digits"
            )));
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn black() -> Self {
        Self("#000000".to_string())
    }
}

impl std::fmt::Display for ColorHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ColorHex {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorHex> for String {
    fn from(value: ColorHex) -> Self {
        value.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
