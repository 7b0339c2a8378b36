//! Composition root: configuration, logging, and listener lifecycle.
//!
//! # Design
//! - Startup happens once per page; later calls find the router attached and
//!   return without side effects.
//! - Everything page-specific is resolved here and handed to the flows as
//!   owned values.

mod router;
mod settings;

use crate::core::config::UiConfig;
use crate::dom::DomPage;
use crate::feedback::select_feedback;
use crate::flows::StatusToggle;
use crate::i18n::TranslationBundle;
use crate::services::api::HttpStatusClient;
use crate::telemetry;
use gloo::events::EventListener;
use gloo::utils::document;
use settings::{load_config, load_locale};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Entry point: install logging and attach the router once the DOM is ready.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let (config, rejected) = load_config();
    if !telemetry::init_logging(config.log_level) {
        debug!("tracing subscriber already installed");
    }
    for setting in rejected {
        warn!(key = setting.key, value = %setting.value, "ignoring invalid setting");
    }

    let doc = document();
    if doc.ready_state() == "loading" {
        EventListener::once(&doc, "DOMContentLoaded", move |_| start(&config)).forget();
    } else {
        start(&config);
    }
}

/// Remove the event listeners installed by [`run_app`].
///
/// Returns `false` when nothing was attached.
pub fn detach() -> bool {
    let detached = router::detach();
    if detached {
        info!("status toggle detached");
    }
    detached
}

fn start(config: &UiConfig) {
    let locale = load_locale(config);
    let bundle = TranslationBundle::new(locale);
    let page = DomPage::new(document(), bundle.clone());
    let client = Rc::new(HttpStatusClient::new(config.clone()));
    let feedback = select_feedback(config, &bundle);
    let toggle = Rc::new(StatusToggle::new(page, client, feedback, bundle));
    if router::attach_once(&toggle) {
        info!(locale = locale.code(), "status toggle attached");
    } else {
        debug!("status toggle already attached");
    }
}
