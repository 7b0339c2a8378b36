//! Confirmation and notification surfaces.
//!
//! # Design
//! - Two interchangeable variants behind [`Feedback`]: Bootstrap modals and
//!   toasts when the toolkit is loaded, native dialogs otherwise.
//! - The choice is made once at startup; a rich surface that fails at runtime
//!   degrades to the native dialog for that call only.

mod native;
mod rich;

pub(crate) use native::NativeFeedback;
pub(crate) use rich::RichFeedback;

use crate::core::config::UiConfig;
use crate::flows::Feedback;
use crate::i18n::TranslationBundle;
use std::rc::Rc;
use tracing::debug;

/// Pick the variant for this page.
pub(crate) fn select_feedback(config: &UiConfig, bundle: &TranslationBundle) -> Rc<dyn Feedback> {
    let available = rich::toolkit_available();
    if config.feedback.use_rich(available) {
        debug!(mode = ?config.feedback, "using rich feedback");
        Rc::new(RichFeedback::new(bundle.clone(), config.toast_delay_ms))
    } else {
        debug!(mode = ?config.feedback, available, "using native feedback");
        Rc::new(NativeFeedback)
    }
}
