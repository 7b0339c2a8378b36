//! Page-provided settings and locale detection.

use crate::core::config::{CONFIG_ATTR_PREFIX, RejectedSetting, UiConfig};
use crate::i18n::LocaleCode;
use gloo::utils::{document, window};

/// Read overrides from `data-status-toggle-*` attributes on `<body>`.
pub(crate) fn load_config() -> (UiConfig, Vec<RejectedSetting>) {
    let body = document().body();
    UiConfig::from_lookup(|key| {
        body.as_ref()
            .and_then(|body| body.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}")))
    })
}

/// Locale for this page: explicit override, `<html lang>`, then the browser.
pub(crate) fn load_locale(config: &UiConfig) -> LocaleCode {
    let page_lang = document()
        .document_element()
        .and_then(|root| root.get_attribute("lang"));
    let browser_lang = window().navigator().language();
    config.resolve_locale(page_lang.as_deref(), browser_lang.as_deref())
}
