//! Bootstrap modal and toast surfaces.
//!
//! Text always goes in through `textContent`; nothing here builds markup from
//! strings, so server messages and item ids render literally.

use crate::core::feedback::{ConfirmPrompt, ConfirmSlot, ToastKind};
use crate::flows::Feedback;
use crate::i18n::TranslationBundle;
use async_trait::async_trait;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use js_sys::{Function, Promise, Reflect};
use std::cell::RefCell;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

const MODAL_ID: &str = "confirmModal";
const TOAST_CONTAINER_ID: &str = "toast-container";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    #[derive(Clone)]
    type BsModal;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Modal")]
    fn new(element: &Element) -> Result<BsModal, JsValue>;

    #[wasm_bindgen(method, js_class = "Modal")]
    fn show(this: &BsModal);

    #[wasm_bindgen(method, js_class = "Modal")]
    fn hide(this: &BsModal);

    #[wasm_bindgen(method, js_class = "Modal")]
    fn dispose(this: &BsModal);

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Toast)]
    #[derive(Clone)]
    type BsToast;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Toast")]
    fn new(element: &Element) -> Result<BsToast, JsValue>;

    #[wasm_bindgen(method, js_class = "Toast")]
    fn show(this: &BsToast);

    #[wasm_bindgen(method, js_class = "Toast")]
    fn hide(this: &BsToast);
}

/// An open confirmation modal and the resolver of its answer.
struct PendingConfirm {
    modal: BsModal,
    root: Element,
    resolve: Function,
}

thread_local! {
    static PENDING: RefCell<ConfirmSlot<PendingConfirm>> = RefCell::new(ConfirmSlot::default());
}

/// Whether the page loaded the Bootstrap bundle.
pub(super) fn toolkit_available() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))
        .is_ok_and(|value| !value.is_undefined())
}

pub(crate) struct RichFeedback {
    bundle: TranslationBundle,
    toast_delay_ms: u32,
}

impl RichFeedback {
    pub(crate) const fn new(bundle: TranslationBundle, toast_delay_ms: u32) -> Self {
        Self {
            bundle,
            toast_delay_ms,
        }
    }

    /// Build and show the modal; the promise settles to the user's answer.
    fn open_modal(&self, prompt: &ConfirmPrompt) -> Result<Promise, JsValue> {
        let doc = document();
        if let Some(stale) = PENDING.with(|slot| slot.borrow_mut().take()) {
            dismiss_stale(&doc, &stale);
        } else if let Some(orphan) = doc.get_element_by_id(MODAL_ID) {
            orphan.remove();
        }

        let root = element(&doc, "div", "modal fade")?;
        root.set_id(MODAL_ID);
        root.set_attribute("tabindex", "-1")?;
        root.set_attribute("aria-hidden", "true")?;

        let title = element(&doc, "h5", "modal-title")?;
        title.set_text_content(Some(&prompt.title));
        let close = dismiss_button(&doc, "btn-close", "modal")?;
        close.set_attribute("aria-label", &self.bundle.text("confirm.close", "Close"))?;
        let header = element(&doc, "div", "modal-header")?;
        append(&header, &[&title, &close])?;

        let message = element(&doc, "p", "mb-0")?;
        message.set_text_content(Some(&prompt.message));
        let body = element(&doc, "div", "modal-body")?;
        append(&body, &[&message])?;

        let cancel = dismiss_button(&doc, "btn btn-secondary", "modal")?;
        cancel.set_text_content(Some(&self.bundle.text("confirm.cancel", "Cancel")));
        let accept = element(&doc, "button", "btn btn-primary")?;
        accept.set_attribute("type", "button")?;
        accept.set_text_content(Some(&prompt.confirm_label));
        let footer = element(&doc, "div", "modal-footer")?;
        append(&footer, &[&cancel, &accept])?;

        let content = element(&doc, "div", "modal-content")?;
        append(&content, &[&header, &body, &footer])?;
        let dialog = element(&doc, "div", "modal-dialog")?;
        append(&dialog, &[&content])?;
        append(&root, &[&dialog])?;
        append(&page_body(&doc)?, &[&root])?;

        let modal = match BsModal::new(&root) {
            Ok(modal) => modal,
            Err(err) => {
                root.remove();
                return Err(err);
            }
        };

        let mut resolver = None;
        let answer = Promise::new(&mut |resolve, _reject| resolver = Some(resolve));
        let Some(resolve) = resolver else {
            modal.dispose();
            root.remove();
            return Err(JsValue::from_str("promise executor did not run"));
        };
        let ticket = PENDING.with(|slot| {
            slot.borrow_mut().open(PendingConfirm {
                modal: modal.clone(),
                root: root.clone(),
                resolve: resolve.clone(),
            })
        });

        // A promise settles once: whichever of confirm or hidden fires first wins.
        let on_accept = resolve.clone();
        let accepted = modal.clone();
        EventListener::new(&accept, "click", move |_| {
            answer_with(&on_accept, true);
            accepted.hide();
        })
        .forget();
        let hidden = root.clone();
        EventListener::once(&root, "hidden.bs.modal", move |_| {
            answer_with(&resolve, false);
            if let Some(done) = PENDING.with(|slot| slot.borrow_mut().settle(ticket)) {
                done.modal.dispose();
            }
            hidden.remove();
        })
        .forget();
        modal.show();
        Ok(answer)
    }

    fn show_toast(&self, kind: ToastKind, message: &str) -> Result<(), JsValue> {
        let doc = document();
        let container = match doc.get_element_by_id(TOAST_CONTAINER_ID) {
            Some(container) => container,
            None => {
                let container =
                    element(&doc, "div", "toast-container position-fixed top-0 end-0 p-3")?;
                container.set_id(TOAST_CONTAINER_ID);
                container.set_attribute("style", "z-index: 9999")?;
                append(&page_body(&doc)?, &[&container])?;
                container
            }
        };

        let toast = element(
            &doc,
            "div",
            &format!(
                "toast align-items-center text-white bg-{} border-0",
                kind.background()
            ),
        )?;
        toast.set_attribute("role", "alert")?;
        toast.set_attribute("aria-live", "assertive")?;
        toast.set_attribute("aria-atomic", "true")?;
        toast.set_attribute("data-bs-autohide", "false")?;

        let icon = element(&doc, "i", &format!("fas fa-{} me-2", kind.icon()))?;
        let text = element(&doc, "span", "")?;
        text.set_text_content(Some(message));
        let body = element(&doc, "div", "toast-body")?;
        append(&body, &[&icon, &text])?;
        let dismiss = dismiss_button(&doc, "btn-close btn-close-white me-2 m-auto", "toast")?;
        dismiss.set_attribute("aria-label", &self.bundle.text("toast.dismiss", "Dismiss"))?;
        let row = element(&doc, "div", "d-flex")?;
        append(&row, &[&body, &dismiss])?;
        append(&toast, &[&row])?;
        append(&container, &[&toast])?;

        let handle = match BsToast::new(&toast) {
            Ok(handle) => handle,
            Err(err) => {
                toast.remove();
                return Err(err);
            }
        };
        let hidden = toast.clone();
        EventListener::once(&toast, "hidden.bs.toast", move |_| hidden.remove()).forget();
        handle.show();
        let expiring = handle.clone();
        Timeout::new(self.toast_delay_ms, move || expiring.hide()).forget();
        Ok(())
    }
}

#[async_trait(?Send)]
impl Feedback for RichFeedback {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        match self.open_modal(prompt) {
            Ok(answer) => match JsFuture::from(answer).await {
                Ok(value) => value.as_bool().unwrap_or(false),
                Err(err) => {
                    warn!(error = ?err, "confirm modal rejected");
                    false
                }
            },
            Err(err) => {
                warn!(error = ?err, "confirm modal unavailable, using native dialog");
                gloo::dialogs::confirm(&prompt.native_text())
            }
        }
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        if let Err(err) = self.show_toast(kind, message) {
            warn!(error = ?err, "toast unavailable, using native alert");
            gloo::dialogs::alert(message);
        }
    }
}

fn answer_with(resolve: &Function, confirmed: bool) {
    if let Err(err) = resolve.call1(&JsValue::NULL, &JsValue::from_bool(confirmed)) {
        warn!(error = ?err, "confirm resolver threw");
    }
}

/// Settle a replaced modal as declined and undo Bootstrap's page lock.
fn dismiss_stale(doc: &Document, stale: &PendingConfirm) {
    answer_with(&stale.resolve, false);
    stale.modal.dispose();
    stale.root.remove();
    if let Ok(backdrops) = doc.query_selector_all(".modal-backdrop") {
        for index in 0..backdrops.length() {
            if let Some(backdrop) = backdrops
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                backdrop.remove();
            }
        }
    }
    if let Some(body) = doc.body() {
        if let Err(err) = body.class_list().remove_1("modal-open") {
            warn!(error = ?err, "could not unlock page after stale modal");
        }
        for property in ["overflow", "padding-right"] {
            if let Err(err) = body.style().remove_property(property) {
                warn!(error = ?err, property, "could not reset page style");
            }
        }
    }
}

fn element(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let node = doc.create_element(tag)?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    Ok(node)
}

fn dismiss_button(doc: &Document, class: &str, target: &str) -> Result<Element, JsValue> {
    let button = element(doc, "button", class)?;
    button.set_attribute("type", "button")?;
    button.set_attribute("data-bs-dismiss", target)?;
    Ok(button)
}

fn append(parent: &Element, children: &[&Element]) -> Result<(), JsValue> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}

fn page_body(doc: &Document) -> Result<Element, JsValue> {
    doc.body()
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("document has no body"))
}
