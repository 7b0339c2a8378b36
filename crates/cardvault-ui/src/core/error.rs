//! Error types for status toggle operations.

use cardvault_api_models::UnknownItemKind;
use thiserror::Error;

/// Failure of a single toggle, from attribute parsing to response decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// `data-item-type` named no known kind.
    #[error("unknown item type `{value}`")]
    UnknownItemType {
        /// Raw attribute value.
        value: String,
    },
    /// A required `data-*` attribute was absent.
    #[error("missing attribute `{name}`")]
    MissingAttribute {
        /// Attribute name.
        name: &'static str,
    },
    /// The request never produced a response.
    #[error("request failed: {detail}")]
    Transport {
        /// Transport error detail.
        detail: String,
    },
    /// The response body was not a toggle envelope.
    #[error("invalid response body: {detail}")]
    Decode {
        /// Decoder error detail.
        detail: String,
    },
}

impl ToggleError {
    /// Whether the error was raised before any request could be built.
    #[must_use]
    pub const fn is_unknown_item_type(&self) -> bool {
        matches!(self, Self::UnknownItemType { .. })
    }
}

impl From<UnknownItemKind> for ToggleError {
    fn from(err: UnknownItemKind) -> Self {
        Self::UnknownItemType { value: err.value }
    }
}
