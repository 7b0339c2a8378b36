//! Runtime configuration read from the host page.
//!
//! # Design
//! - Every field has a default so a bare page works unchanged.
//! - Parsing is DOM-free: the caller supplies a key lookup and logs the
//!   rejected values we hand back.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use cardvault_api_models::{CSRF_FORM_FIELD, CSRF_HEADER, CSRF_META_NAME};
use std::str::FromStr;
use tracing::Level;

/// Prefix of the `<body>` attributes carrying overrides.
pub const CONFIG_ATTR_PREFIX: &str = "data-status-toggle-";

/// How confirmations and notifications are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackMode {
    /// Rich dialogs when the UI toolkit is loaded, native ones otherwise.
    #[default]
    Auto,
    /// Always use the toolkit.
    Rich,
    /// Always use `confirm()`/`alert()`.
    Native,
}

impl FromStr for FeedbackMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "rich" => Ok(Self::Rich),
            "native" => Ok(Self::Native),
            _ => Err(()),
        }
    }
}

impl FeedbackMode {
    /// Whether the rich variant should be used given toolkit availability.
    #[must_use]
    pub const fn use_rich(self, toolkit_available: bool) -> bool {
        match self {
            Self::Auto => toolkit_available,
            Self::Rich => true,
            Self::Native => false,
        }
    }
}

/// Component configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Prefix for toggle endpoints; empty means same origin.
    pub base_url: String,
    /// Explicit locale override.
    pub locale: Option<LocaleCode>,
    /// Header carrying the CSRF token.
    pub csrf_header: String,
    /// `name` of the CSRF meta tag.
    pub csrf_meta_name: String,
    /// `name` of the CSRF hidden form field.
    pub csrf_field_name: String,
    /// How long a rich toast stays visible.
    pub toast_delay_ms: u32,
    /// Feedback variant selection.
    pub feedback: FeedbackMode,
    /// Most verbose level forwarded to the console.
    pub log_level: Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            locale: None,
            csrf_header: CSRF_HEADER.to_string(),
            csrf_meta_name: CSRF_META_NAME.to_string(),
            csrf_field_name: CSRF_FORM_FIELD.to_string(),
            toast_delay_ms: 5000,
            feedback: FeedbackMode::Auto,
            log_level: Level::INFO,
        }
    }
}

/// An override that could not be parsed and was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedSetting {
    /// Attribute key without prefix.
    pub key: &'static str,
    /// Offending value.
    pub value: String,
}

impl UiConfig {
    /// Build from a lookup keyed by attribute suffix (`base-url`, `locale`, ...).
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<RejectedSetting>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(base_url) = lookup("base-url") {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(header) = lookup("csrf-header").filter(|value| !value.trim().is_empty()) {
            config.csrf_header = header.trim().to_string();
        }
        if let Some(value) = lookup("locale") {
            match LocaleCode::from_lang_tag(&value) {
                Some(locale) => config.locale = Some(locale),
                None => rejected.push(RejectedSetting { key: "locale", value }),
            }
        }
        if let Some(value) = lookup("toast-delay") {
            match value.trim().parse::<u32>() {
                Ok(delay) => config.toast_delay_ms = delay,
                Err(_) => rejected.push(RejectedSetting {
                    key: "toast-delay",
                    value,
                }),
            }
        }
        if let Some(value) = lookup("feedback") {
            match value.parse::<FeedbackMode>() {
                Ok(mode) => config.feedback = mode,
                Err(()) => rejected.push(RejectedSetting {
                    key: "feedback",
                    value,
                }),
            }
        }
        if let Some(value) = lookup("log-level") {
            match value.trim().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(RejectedSetting {
                    key: "log-level",
                    value,
                }),
            }
        }
        (config, rejected)
    }

    /// Locale to use: explicit override, then page language, then browser language.
    #[must_use]
    pub fn resolve_locale(&self, page_lang: Option<&str>, browser_lang: Option<&str>) -> LocaleCode {
        self.locale
            .or_else(|| page_lang.and_then(LocaleCode::from_lang_tag))
            .or_else(|| browser_lang.and_then(LocaleCode::from_lang_tag))
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// Absolute request URL for an endpoint path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_page_yields_defaults() {
        let (config, rejected) = UiConfig::from_lookup(|_| None);
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.csrf_meta_name, "csrf-token");
        assert_eq!(config.csrf_field_name, "csrfmiddlewaretoken");
        assert!(rejected.is_empty());
    }

    #[test]
    fn overrides_apply_and_bad_values_are_reported() {
        let (config, rejected) = UiConfig::from_lookup(lookup(&[
            ("base-url", "https://admin.example/"),
            ("locale", "zh-CN"),
            ("toast-delay", "soon"),
            ("feedback", "native"),
            ("log-level", "debug"),
        ]));
        assert_eq!(config.base_url, "https://admin.example/");
        assert_eq!(config.locale, Some(LocaleCode::Zh));
        assert_eq!(config.toast_delay_ms, 5000);
        assert_eq!(config.feedback, FeedbackMode::Native);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            rejected,
            vec![RejectedSetting {
                key: "toast-delay",
                value: "soon".into()
            }]
        );
    }

    #[test]
    fn url_joins_without_double_slash() {
        let config = UiConfig {
            base_url: "https://admin.example/".into(),
            ..UiConfig::default()
        };
        assert_eq!(
            config.url_for("/cards/9/toggle-status/"),
            "https://admin.example/cards/9/toggle-status/"
        );
        assert_eq!(UiConfig::default().url_for("/cards/9/toggle-status/"), "/cards/9/toggle-status/");
    }

    #[test]
    fn locale_resolution_order() {
        let config = UiConfig::default();
        assert_eq!(config.resolve_locale(Some("zh-Hans"), Some("en-US")), LocaleCode::Zh);
        assert_eq!(config.resolve_locale(Some("fr"), Some("zh")), LocaleCode::Zh);
        assert_eq!(config.resolve_locale(None, None), LocaleCode::En);
        let pinned = UiConfig {
            locale: Some(LocaleCode::En),
            ..UiConfig::default()
        };
        assert_eq!(pinned.resolve_locale(Some("zh"), None), LocaleCode::En);
    }

    #[test]
    fn feedback_mode_selection() {
        assert!(FeedbackMode::Auto.use_rich(true));
        assert!(!FeedbackMode::Auto.use_rich(false));
        assert!(FeedbackMode::Rich.use_rich(false));
        assert!(!FeedbackMode::Native.use_rich(true));
    }
}
