#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Cardvault status toggle endpoints.
//!
//! The server owns the semantics of a toggle; this crate only pins down the
//! routes, headers and response envelope the browser component relies on so
//! both sides agree on a single contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header carrying the anti-forgery token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// `name` of the `<meta>` tag the page renders the CSRF token into.
pub const CSRF_META_NAME: &str = "csrf-token";
/// `name` of the hidden form field used when the meta tag is absent.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Resource kinds whose enabled flag can be toggled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Application API key.
    ApiKey,
    /// Redemption card.
    Card,
}

impl ItemKind {
    /// All toggleable kinds.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::ApiKey, Self::Card]
    }

    /// Wire value used in `data-item-type` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::Card => "card",
        }
    }

    /// Toggle endpoint for the item, with the identifier substituted verbatim.
    #[must_use]
    pub fn toggle_path(self, id: &str) -> String {
        match self {
            Self::ApiKey => format!("/api/keys/{id}/toggle-status/"),
            Self::Card => format!("/cards/{id}/toggle-status/"),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an item type attribute names no known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item type `{value}`")]
pub struct UnknownItemKind {
    /// Raw value that failed to parse.
    pub value: String,
}

impl FromStr for ItemKind {
    type Err = UnknownItemKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownItemKind {
                value: value.to_string(),
            })
    }
}

/// Body returned by both toggle endpoints, on success and on failure.
///
/// Failures arrive with a 4xx/5xx status and `success: false`; the status code
/// itself carries no extra information for the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleStatusResponse {
    /// Whether the server flipped the flag.
    pub success: bool,
    /// Flag value after the toggle. Absent on failure.
    #[serde(default)]
    pub new_status: bool,
    /// Display label for the new state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    /// Human-readable outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_paths_substitute_identifier_exactly() {
        assert_eq!(ItemKind::ApiKey.toggle_path("42"), "/api/keys/42/toggle-status/");
        assert_eq!(ItemKind::Card.toggle_path("a-7"), "/cards/a-7/toggle-status/");
    }

    #[test]
    fn item_kind_parses_wire_values_only() {
        assert_eq!("api_key".parse::<ItemKind>(), Ok(ItemKind::ApiKey));
        assert_eq!("card".parse::<ItemKind>(), Ok(ItemKind::Card));
        let err = "Card".parse::<ItemKind>().unwrap_err();
        assert_eq!(err.value, "Card");
        assert!("".parse::<ItemKind>().is_err());
    }

    #[test]
    fn failure_body_without_status_decodes() {
        let body = r#"{"success": false, "message": "no permission"}"#;
        let parsed: ToggleStatusResponse = serde_json::from_str(body).expect("decode");
        assert!(!parsed.success);
        assert!(!parsed.new_status);
        assert_eq!(parsed.message.as_deref(), Some("no permission"));
        assert_eq!(parsed.status_text, None);
    }

    #[test]
    fn success_body_decodes_all_fields() {
        let body = r#"{"success":true,"new_status":true,"status_text":"Enabled","message":"ok"}"#;
        let parsed: ToggleStatusResponse = serde_json::from_str(body).expect("decode");
        assert_eq!(
            parsed,
            ToggleStatusResponse {
                success: true,
                new_status: true,
                status_text: Some("Enabled".into()),
                message: Some("ok".into()),
            }
        );
    }

    #[test]
    fn item_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ItemKind::ApiKey).expect("encode");
        assert_eq!(json, "\"api_key\"");
        assert_eq!(ItemKind::Card.to_string(), "card");
    }
}
