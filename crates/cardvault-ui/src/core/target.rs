//! Typed views over the `data-*` attributes of toggle and batch buttons.
//!
//! # Design
//! - Read attributes through a lookup closure so parsing stays DOM-free.
//! - Keep the item type raw: an unknown type must still reach the request
//!   step, where it aborts before any network call.

use crate::core::error::ToggleError;
use crate::core::markup::{ATTR_ACTION, ATTR_CURRENT_STATUS, ATTR_ITEM_ID, ATTR_ITEM_TYPE};
use cardvault_api_models::ItemKind;

/// Attributes of a single-item toggle button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleTarget {
    /// Item identifier, substituted verbatim into the endpoint path.
    pub item_id: String,
    /// Raw `data-item-type` value.
    pub item_type: String,
    /// Last server-confirmed status.
    pub current_status: bool,
}

impl ToggleTarget {
    /// Parse from an attribute lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingAttribute`] when the item id is absent.
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ToggleError> {
        let item_id = lookup(ATTR_ITEM_ID).ok_or(ToggleError::MissingAttribute {
            name: ATTR_ITEM_ID,
        })?;
        Ok(Self {
            item_id,
            item_type: lookup(ATTR_ITEM_TYPE).unwrap_or_default(),
            current_status: parse_status(lookup(ATTR_CURRENT_STATUS).as_deref()),
        })
    }

    /// Resolve the item kind.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::UnknownItemType`] for anything but `api_key`/`card`.
    pub fn kind(&self) -> Result<ItemKind, ToggleError> {
        Ok(self.item_type.parse::<ItemKind>()?)
    }

    /// Action the user is about to perform.
    #[must_use]
    pub const fn pending_action(&self) -> ToggleAction {
        if self.current_status {
            ToggleAction::Disable
        } else {
            ToggleAction::Enable
        }
    }
}

/// Only the literal `"true"` counts as enabled.
#[must_use]
pub fn parse_status(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Direction of a toggle as shown to the user; requests are always toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Enable the selected items.
    Enable,
    /// Disable the selected items.
    Disable,
}

impl ToggleAction {
    /// Anything but `enable` reads as disable.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some("enable") => Self::Enable,
            _ => Self::Disable,
        }
    }

    /// Translation key suffix for the action.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

/// Attributes of a batch action button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchTarget {
    /// Cosmetic action direction; the requests still toggle.
    pub action: ToggleAction,
    /// Raw `data-item-type` value.
    pub item_type: String,
}

impl BatchTarget {
    /// Parse from an attribute lookup; missing values degrade to defaults.
    #[must_use]
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            action: ToggleAction::from_attr(lookup(ATTR_ACTION).as_deref()),
            item_type: lookup(ATTR_ITEM_TYPE).unwrap_or_default(),
        }
    }

    /// Resolve the item kind.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::UnknownItemType`] for anything but `api_key`/`card`.
    pub fn kind(&self) -> Result<ItemKind, ToggleError> {
        Ok(self.item_type.parse::<ItemKind>()?)
    }
}
