//! Browser-native dialogs.

use crate::core::feedback::{ConfirmPrompt, ToastKind};
use crate::flows::Feedback;
use async_trait::async_trait;
use gloo::dialogs::{alert, confirm};

pub(crate) struct NativeFeedback;

#[async_trait(?Send)]
impl Feedback for NativeFeedback {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        confirm(&prompt.native_text())
    }

    fn notify(&self, _kind: ToastKind, message: &str) {
        alert(message);
    }
}
