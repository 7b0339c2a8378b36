//! Toggle flows over the page, transport, and feedback seams.
//!
//! # Design
//! - Flows own sequencing only: confirm, busy state, request, apply, report.
//! - Every DOM mutation goes through [`StatusPage`], every request through
//!   [`StatusClient`], every dialog/toast through [`Feedback`], so the flows
//!   run natively under test with in-memory fakes.
//! - Handlers swallow their own failures; a listener never sees an error.

mod batch;
mod selection;
mod single;


use crate::core::error::ToggleError;
use crate::core::feedback::{ConfirmPrompt, ToastKind};
use crate::core::target::{BatchTarget, ToggleTarget};
use crate::i18n::TranslationBundle;
use async_trait::async_trait;
use cardvault_api_models::{ItemKind, ToggleStatusResponse};
use std::rc::Rc;

/// Issues toggle requests.
#[async_trait(?Send)]
pub trait StatusClient {
    /// POST the toggle endpoint at `path` and decode the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Transport`] when no response arrives and
    /// [`ToggleError::Decode`] when the body is not a toggle envelope.
    async fn toggle(&self, path: &str) -> Result<ToggleStatusResponse, ToggleError>;
}

/// Confirmation dialogs and notifications.
#[async_trait(?Send)]
pub trait Feedback {
    /// Ask the user; resolves once, `true` only on explicit confirmation.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;

    /// Show a transient notification.
    fn notify(&self, kind: ToastKind, message: &str);
}

/// The page the component reads from and writes to.
///
/// The page is the source of truth: status lives in button attributes and the
/// selection is whatever is checked right now.
pub trait StatusPage {
    /// Handle to a button or checkbox.
    type Element: Clone;

    /// Attributes of a single-item toggle button.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingAttribute`] when the item id is absent.
    fn toggle_target(&self, button: &Self::Element) -> Result<ToggleTarget, ToggleError>;

    /// Attributes of a batch action button.
    fn batch_target(&self, button: &Self::Element) -> BatchTarget;

    /// Store `new_status` and restyle the button for it.
    fn update_button_status(&self, button: &Self::Element, new_status: bool, status_text: Option<&str>);

    /// Dim or undim the row holding `button`.
    fn update_row_style(&self, button: &Self::Element, new_status: bool);

    /// Enter or leave the busy presentation without touching the status.
    fn set_button_loading(&self, button: &Self::Element, loading: bool);

    /// Toggle button for `item_id`, if it is still on the page.
    fn find_toggle_button(&self, item_id: &str) -> Option<Self::Element>;

    /// Ids of the checked item checkboxes, in document order.
    fn selected_items(&self) -> Vec<String>;

    /// Copy a select-all checkbox's state onto every item checkbox of its table.
    fn select_all_in_table(&self, checkbox: &Self::Element);

    /// Uncheck every item and select-all checkbox, then refresh batch buttons.
    fn clear_selection(&self);

    /// Recompute batch button enabled state and selection count labels.
    fn update_batch_buttons(&self);
}

/// Composition root wiring a page to its transport and feedback.
pub struct StatusToggle<P: StatusPage> {
    page: P,
    client: Rc<dyn StatusClient>,
    feedback: Rc<dyn Feedback>,
    bundle: TranslationBundle,
}

impl<P: StatusPage> StatusToggle<P> {
    /// Wire the component.
    pub fn new(
        page: P,
        client: Rc<dyn StatusClient>,
        feedback: Rc<dyn Feedback>,
        bundle: TranslationBundle,
    ) -> Self {
        Self {
            page,
            client,
            feedback,
            bundle,
        }
    }

    /// Page the component drives.
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Resolve the endpoint for an item and issue the request.
    ///
    /// Unknown item types fail here, before the client is reached.
    async fn request(&self, item_type: &str, item_id: &str) -> Result<ToggleStatusResponse, ToggleError> {
        let kind = item_type.parse::<ItemKind>()?;
        self.client.toggle(&kind.toggle_path(item_id)).await
    }

    fn notify_network_error(&self) {
        self.feedback.notify(
            ToastKind::Error,
            &self.bundle.text("toast.network", "Network error, please retry"),
        );
    }
}
