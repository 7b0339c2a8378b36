//! Single-item toggle: confirm, request, apply.

use super::{StatusPage, StatusToggle};
use crate::core::batch::ItemOutcome;
use crate::core::feedback::{ToastKind, single_prompt};
use tracing::{debug, error, info, warn};

impl<P: StatusPage> StatusToggle<P> {
    /// Toggle the item behind `button`.
    ///
    /// Declining the confirmation leaves the page untouched. Otherwise the
    /// button is busy for exactly the duration of the request, and its status
    /// only changes when the server reports success.
    pub async fn handle_toggle(&self, button: &P::Element) {
        let target = match self.page.toggle_target(button) {
            Ok(target) => target,
            Err(err) => {
                error!(error = %err, "toggle button is not usable");
                self.notify_network_error();
                return;
            }
        };

        let prompt = single_prompt(&self.bundle, target.pending_action(), &target.item_type);
        if !self.feedback.confirm(&prompt).await {
            debug!(item_id = %target.item_id, "toggle declined");
            return;
        }

        self.page.set_button_loading(button, true);
        let result = self.request(&target.item_type, &target.item_id).await;
        self.page.set_button_loading(button, false);

        match ItemOutcome::from_result(result) {
            ItemOutcome::Applied {
                new_status,
                status_text,
                message,
            } => {
                self.page
                    .update_button_status(button, new_status, status_text.as_deref());
                self.page.update_row_style(button, new_status);
                info!(
                    item_id = %target.item_id,
                    item_type = %target.item_type,
                    new_status,
                    "status toggled"
                );
                let message = message
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| self.bundle.text("toast.updated", "Status updated"));
                self.feedback.notify(ToastKind::Success, &message);
            }
            ItemOutcome::Rejected { message } => {
                warn!(
                    item_id = %target.item_id,
                    server_message = message.as_deref().unwrap_or_default(),
                    "toggle rejected"
                );
                let message = message
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| self.bundle.text("toast.failed", "Operation failed"));
                self.feedback.notify(ToastKind::Error, &message);
            }
            ItemOutcome::Failed(err) => {
                error!(
                    item_id = %target.item_id,
                    unknown_type = err.is_unknown_item_type(),
                    error = %err,
                    "toggle failed"
                );
                self.notify_network_error();
            }
        }
    }
}
