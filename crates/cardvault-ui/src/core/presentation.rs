//! Button and row presentation for each status.
//!
//! # Design
//! - One table of classes/icons per state so the DOM layer and the tests agree.
//! - Labels come from the server when provided, the locale bundle otherwise.

use crate::core::markup::{ATTR_IDLE_ICON, ATTR_IDLE_LABEL};
use crate::i18n::TranslationBundle;

/// Button classes while the item is enabled.
pub const ENABLED_BUTTON_CLASS: &str = "btn btn-success btn-sm status-toggle-btn";
/// Button classes while the item is disabled.
pub const DISABLED_BUTTON_CLASS: &str = "btn btn-secondary btn-sm status-toggle-btn";
/// Icon classes while the item is enabled.
pub const ENABLED_ICON_CLASS: &str = "fas fa-toggle-on me-1";
/// Icon classes while the item is disabled.
pub const DISABLED_ICON_CLASS: &str = "fas fa-toggle-off me-1";
/// Icon classes while a request is in flight.
pub const LOADING_ICON_CLASS: &str = "fas fa-spinner fa-spin me-1";
/// Muted background applied to rows of disabled items.
pub const ROW_DIMMED_CLASS: &str = "table-secondary";

/// Full presentation of a toggle button in a settled state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    /// Complete `class` attribute for the button.
    pub class: &'static str,
    /// Complete `class` attribute for the icon child.
    pub icon: &'static str,
    /// Text for the `.btn-text` child.
    pub label: String,
}

/// Presentation for `enabled`, preferring a non-empty server label.
#[must_use]
pub fn status_view(bundle: &TranslationBundle, enabled: bool, status_text: Option<&str>) -> ButtonView {
    let server_label = status_text.filter(|text| !text.is_empty());
    if enabled {
        ButtonView {
            class: ENABLED_BUTTON_CLASS,
            icon: ENABLED_ICON_CLASS,
            label: server_label.map_or_else(|| bundle.text("status.enabled", "Enabled"), str::to_string),
        }
    } else {
        ButtonView {
            class: DISABLED_BUTTON_CLASS,
            icon: DISABLED_ICON_CLASS,
            label: server_label
                .map_or_else(|| bundle.text("status.disabled", "Disabled"), str::to_string),
        }
    }
}

/// Label shown while a request is in flight.
#[must_use]
pub fn loading_label(bundle: &TranslationBundle) -> String {
    bundle.text("status.processing", "Processing...")
}

/// Row treatment reflecting an item's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowStyle {
    /// Whether the muted treatment applies.
    pub dimmed: bool,
}

impl RowStyle {
    /// Rows of disabled items are dimmed.
    #[must_use]
    pub const fn for_status(enabled: bool) -> Self {
        Self { dimmed: !enabled }
    }

    /// Inline `opacity` value.
    #[must_use]
    pub const fn opacity(self) -> &'static str {
        if self.dimmed { "0.6" } else { "1" }
    }
}

/// State shared by every batch action button for a selection size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchButtonsView {
    /// Buttons are disabled while nothing is selected.
    pub disabled: bool,
    /// Text for `.selected-count` placeholders.
    pub count_label: String,
}

impl BatchButtonsView {
    /// View for `count` selected items.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        Self {
            disabled: count == 0,
            count_label: count.to_string(),
        }
    }
}

/// Idle icon and label saved on a button while it shows its busy state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdleStash {
    /// Icon classes before the spinner replaced them.
    pub icon: Option<String>,
    /// Label text before the busy label replaced it.
    pub label: Option<String>,
}

impl IdleStash {
    /// Attributes a stash may occupy; all are cleared when the button settles.
    pub const ATTRIBUTES: [&'static str; 2] = [ATTR_IDLE_ICON, ATTR_IDLE_LABEL];

    /// Attribute writes recording the stash. Parts the button lacks are skipped.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        [
            (ATTR_IDLE_ICON, self.icon.as_deref()),
            (ATTR_IDLE_LABEL, self.label.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn enabled_view_uses_server_label() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let view = status_view(&bundle, true, Some("On"));
        assert_eq!(view.class, ENABLED_BUTTON_CLASS);
        assert_eq!(view.icon, ENABLED_ICON_CLASS);
        assert_eq!(view.label, "On");
    }

    #[test]
    fn empty_server_label_falls_back_to_locale_default() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        assert_eq!(status_view(&bundle, false, Some("")).label, "禁用");
        assert_eq!(status_view(&bundle, true, None).label, "启用");
    }

    #[test]
    fn disabled_view_switches_classes() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let view = status_view(&bundle, false, None);
        assert_eq!(view.class, DISABLED_BUTTON_CLASS);
        assert_eq!(view.icon, DISABLED_ICON_CLASS);
        assert_eq!(view.label, "Disabled");
    }

    #[test]
    fn idle_stash_writes_only_present_parts() {
        let stash = IdleStash {
            icon: None,
            label: Some("Enabled".into()),
        };
        assert_eq!(stash.attributes(), vec![(ATTR_IDLE_LABEL, "Enabled")]);
        assert!(IdleStash::default().attributes().is_empty());
        let full = IdleStash {
            icon: Some(ENABLED_ICON_CLASS.into()),
            label: Some(String::new()),
        };
        let names: Vec<_> = full.attributes().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, IdleStash::ATTRIBUTES);
    }

    #[test]
    fn batch_buttons_disable_only_for_empty_selection() {
        assert_eq!(
            BatchButtonsView::for_count(0),
            BatchButtonsView {
                disabled: true,
                count_label: "0".into()
            }
        );
        let view = BatchButtonsView::for_count(4);
        assert!(!view.disabled);
        assert_eq!(view.count_label, "4");
    }

    #[test]
    fn rows_dim_exactly_when_disabled() {
        assert!(RowStyle::for_status(false).dimmed);
        assert_eq!(RowStyle::for_status(false).opacity(), "0.6");
        assert!(!RowStyle::for_status(true).dimmed);
        assert_eq!(RowStyle::for_status(true).opacity(), "1");
    }
}
