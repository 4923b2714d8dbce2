/// Convenience result type used across cardsmith.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by the card APIs.
///
/// Only [`CardError::Validation`], [`CardError::Serde`] and [`CardError::Other`] are raised as hard
/// errors (at the configuration boundary). The remaining variants describe degradations that are
/// reported next to a still-usable value, see [`WithWarnings`].
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid user-provided card data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown theme, texture, edge style or catalog key.
    #[error("missing configuration: unknown {kind} '{key}'")]
    ConfigurationMissing {
        /// Which table the key was looked up in.
        kind: &'static str,
        /// The key that was not found.
        key: String,
    },

    /// Out-of-range numeric parameter that was clamped to a safe value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The asset collaborator has no asset at this path.
    #[error("asset not found: '{path}'")]
    AssetNotFound {
        /// Normalized logical asset path.
        path: String,
    },

    /// The asset exists but could not be read or decoded.
    #[error("asset load failure: {0}")]
    AssetLoad(String),

    /// Errors when serializing or deserializing card files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::ConfigurationMissing`] value.
    pub fn configuration_missing(kind: &'static str, key: impl Into<String>) -> Self {
        Self::ConfigurationMissing {
            kind,
            key: key.into(),
        }
    }

    /// Build a [`CardError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`CardError::AssetNotFound`] value.
    pub fn asset_not_found(path: impl Into<String>) -> Self {
        Self::AssetNotFound { path: path.into() }
    }

    /// Build a [`CardError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`CardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error only degrades output instead of halting it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. }
                | Self::InvalidParameter(_)
                | Self::AssetNotFound { .. }
                | Self::AssetLoad(_)
        )
    }
}

/// A computed value together with the non-fatal problems hit while computing it.
#[derive(Debug)]
pub struct WithWarnings<T> {
    /// The (possibly degraded) result.
    pub value: T,
    /// Recoverable errors, in the order they were encountered.
    pub warnings: Vec<CardError>,
}

impl<T> WithWarnings<T> {
    /// Wrap a value that was computed without problems.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Wrap a value with an already collected warning list.
    pub fn new(value: T, warnings: Vec<CardError>) -> Self {
        Self { value, warnings }
    }

    /// Whether any warnings were recorded.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Map the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WithWarnings<U> {
        WithWarnings {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Move this value's warnings into `sink` and return the bare value.
    pub fn drain_into(self, sink: &mut Vec<CardError>) -> T {
        sink.extend(self.warnings);
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
