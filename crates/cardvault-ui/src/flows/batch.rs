//! Batch toggle over the current selection.

use super::{StatusPage, StatusToggle};
use crate::core::batch::{BatchTally, ItemOutcome};
use crate::core::feedback::{
    ToastKind, batch_failure_message, batch_prompt, batch_success_message,
};
use futures_util::future::join_all;
use tracing::{debug, error, info, warn};

impl<P: StatusPage> StatusToggle<P> {
    /// Toggle every selected item concurrently.
    ///
    /// Each item settles on its own: one failed request never hides the others'
    /// results. Returns `None` when nothing was attempted (empty selection or
    /// declined confirmation), otherwise the tally.
    pub async fn handle_batch_toggle(&self, button: &P::Element) -> Option<BatchTally> {
        let target = self.page.batch_target(button);
        let selected = self.page.selected_items();
        if selected.is_empty() {
            self.feedback.notify(
                ToastKind::Warning,
                &self
                    .bundle
                    .text("toast.empty_selection", "Select at least one item first"),
            );
            return None;
        }

        let prompt = batch_prompt(&self.bundle, target.action, &target.item_type, selected.len());
        if !self.feedback.confirm(&prompt).await {
            debug!(count = selected.len(), "batch declined");
            return None;
        }

        self.page.set_button_loading(button, true);
        let results = join_all(
            selected
                .iter()
                .map(|item_id| self.request(&target.item_type, item_id)),
        )
        .await;

        let mut tally = BatchTally::default();
        for (item_id, result) in selected.iter().zip(results) {
            let outcome = ItemOutcome::from_result(result);
            tally.record(&outcome);
            match outcome {
                ItemOutcome::Applied {
                    new_status,
                    status_text,
                    ..
                } => match self.page.find_toggle_button(item_id) {
                    Some(toggle) => {
                        self.page
                            .update_button_status(&toggle, new_status, status_text.as_deref());
                        self.page.update_row_style(&toggle, new_status);
                    }
                    None => debug!(%item_id, "toggled item no longer on page"),
                },
                ItemOutcome::Rejected { message } => warn!(
                    %item_id,
                    server_message = message.as_deref().unwrap_or_default(),
                    "batch item rejected"
                ),
                ItemOutcome::Failed(err) => error!(%item_id, error = %err, "batch item failed"),
            }
        }

        if tally.succeeded > 0 {
            self.feedback.notify(
                ToastKind::Success,
                &batch_success_message(&self.bundle, target.action, tally.succeeded),
            );
        }
        if tally.failed > 0 {
            self.feedback.notify(
                ToastKind::Warning,
                &batch_failure_message(&self.bundle, tally.failed),
            );
        }

        self.page.set_button_loading(button, false);
        self.page.clear_selection();
        info!(
            total = tally.total(),
            succeeded = tally.succeeded,
            failed = tally.failed,
            "batch toggle settled"
        );
        Some(tally)
    }
}
