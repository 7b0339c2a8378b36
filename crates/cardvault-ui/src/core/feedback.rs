//! Notification kinds and confirmation prompt text.

use crate::core::target::ToggleAction;
use crate::i18n::TranslationBundle;
use cardvault_api_models::ItemKind;

/// Toast variants, each with its own colour and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Partial failure or nothing to do.
    Warning,
}

impl ToastKind {
    /// Bootstrap contextual colour suffix (`bg-*`).
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "danger",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon name (`fa-*`).
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
        }
    }
}

/// Text of a confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Dialog title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Label of the confirm button.
    pub confirm_label: String,
}

impl ConfirmPrompt {
    /// Single string for the native `confirm()` fallback.
    #[must_use]
    pub fn native_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.message)
    }
}

/// Prompt for toggling one item.
#[must_use]
pub fn single_prompt(bundle: &TranslationBundle, action: ToggleAction, item_type: &str) -> ConfirmPrompt {
    let words = ActionWords::new(bundle, action);
    let kind = kind_noun(bundle, item_type, false);
    let args = [
        ("action", words.verb.as_str()),
        ("Action", words.label.as_str()),
        ("kind", kind.as_str()),
    ];
    ConfirmPrompt {
        title: bundle.format("confirm.single_title", "{Action} {kind}", &args),
        message: bundle.format("confirm.single_message", "{action} {kind}?", &args),
        confirm_label: words.label,
    }
}

/// Prompt for a batch over `count` selected items.
#[must_use]
pub fn batch_prompt(
    bundle: &TranslationBundle,
    action: ToggleAction,
    item_type: &str,
    count: usize,
) -> ConfirmPrompt {
    let words = ActionWords::new(bundle, action);
    let kinds = kind_noun(bundle, item_type, true);
    let count = count.to_string();
    let args = [
        ("action", words.verb.as_str()),
        ("Action", words.label.as_str()),
        ("kinds", kinds.as_str()),
        ("count", count.as_str()),
    ];
    ConfirmPrompt {
        title: bundle.format("confirm.batch_title", "{Action} {count} {kinds}", &args),
        message: bundle.format("confirm.batch_message", "{action} {count} {kinds}?", &args),
        confirm_label: words.label,
    }
}

/// Success summary for a batch.
#[must_use]
pub fn batch_success_message(bundle: &TranslationBundle, action: ToggleAction, count: usize) -> String {
    let words = ActionWords::new(bundle, action);
    let count = count.to_string();
    bundle.format(
        "toast.batch_success",
        "{done} {count}",
        &[
            ("action", words.verb.as_str()),
            ("done", words.done.as_str()),
            ("count", count.as_str()),
        ],
    )
}

/// Failure summary for a batch.
#[must_use]
pub fn batch_failure_message(bundle: &TranslationBundle, count: usize) -> String {
    let count = count.to_string();
    bundle.format("toast.batch_failed", "{count} failed", &[("count", count.as_str())])
}

/// Localised noun for a raw item type; unknown types get a generic noun.
#[must_use]
pub fn kind_noun(bundle: &TranslationBundle, item_type: &str, plural: bool) -> String {
    let key = item_type
        .parse::<ItemKind>()
        .map_or("unknown", ItemKind::as_str);
    let path = if plural {
        format!("kind.{key}_plural")
    } else {
        format!("kind.{key}")
    };
    bundle.text(&path, key)
}

/// The one confirmation that may be open at a time.
///
/// Opening a dialog returns a ticket; settling with a ticket that is no longer
/// current is a no-op, so a replaced dialog can never close its successor.
#[derive(Debug)]
pub struct ConfirmSlot<T> {
    current: Option<(u64, T)>,
    issued: u64,
}

impl<T> Default for ConfirmSlot<T> {
    fn default() -> Self {
        Self {
            current: None,
            issued: 0,
        }
    }
}

impl<T> ConfirmSlot<T> {
    /// Take the open dialog, if any, so it can be settled as declined.
    pub fn take(&mut self) -> Option<T> {
        self.current.take().map(|(_, pending)| pending)
    }

    /// Record a newly opened dialog and return its ticket.
    pub fn open(&mut self, pending: T) -> u64 {
        self.issued += 1;
        self.current = Some((self.issued, pending));
        self.issued
    }

    /// Release the dialog behind `ticket` if it is still the open one.
    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if self
            .current
            .as_ref()
            .is_some_and(|(current, _)| *current == ticket)
        {
            self.take()
        } else {
            None
        }
    }
}

struct ActionWords {
    verb: String,
    label: String,
    done: String,
}

impl ActionWords {
    fn new(bundle: &TranslationBundle, action: ToggleAction) -> Self {
        let key = action.key();
        Self {
            verb: bundle.text(&format!("action.{key}"), key),
            label: bundle.text(&format!("action.{key}_label"), key),
            done: bundle.text(&format!("action.{key}_done"), key),
        }
    }
}
