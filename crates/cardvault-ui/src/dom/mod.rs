//! `web_sys` implementation of the page seam.
//!
//! # Design
//! - Status and selection are re-read from the DOM on every call; nothing is
//!   cached between interactions.
//! - Missing optional children (icon, label, row) are skipped silently.
//! - DOM exceptions are logged and never abort a flow.

use crate::core::error::ToggleError;
use crate::core::markup::{
    ATTR_CURRENT_STATUS, ATTR_IDLE_ICON, ATTR_IDLE_LABEL, BATCH_BUTTON_CLASS, BUTTON_TEXT_CLASS,
    SELECT_ALL_CLASS, SELECT_ITEM_CLASS, SELECTED_COUNT_CLASS, class_selector,
    toggle_button_selector,
};
use crate::core::presentation::{
    BatchButtonsView, IdleStash, LOADING_ICON_CLASS, ROW_DIMMED_CLASS, RowStyle, loading_label,
    status_view,
};
use crate::core::target::{BatchTarget, ToggleTarget};
use crate::flows::StatusPage;
use crate::i18n::TranslationBundle;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, NodeList};

/// The live document.
pub(crate) struct DomPage {
    document: Document,
    bundle: TranslationBundle,
}

impl DomPage {
    pub(crate) const fn new(document: Document, bundle: TranslationBundle) -> Self {
        Self { document, bundle }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                report("query selector", &err);
                Vec::new()
            }
        }
    }

    fn checkboxes(&self, selector: &str) -> Vec<HtmlInputElement> {
        self.query_all(selector)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }
}

impl StatusPage for DomPage {
    type Element = Element;

    fn toggle_target(&self, button: &Element) -> Result<ToggleTarget, ToggleError> {
        ToggleTarget::from_attrs(|name| button.get_attribute(name))
    }

    fn batch_target(&self, button: &Element) -> BatchTarget {
        BatchTarget::from_attrs(|name| button.get_attribute(name))
    }

    fn update_button_status(&self, button: &Element, new_status: bool, status_text: Option<&str>) {
        let view = status_view(&self.bundle, new_status, status_text);
        let status = if new_status { "true" } else { "false" };
        if let Err(err) = button.set_attribute(ATTR_CURRENT_STATUS, status) {
            report("store status", &err);
        }
        button.set_class_name(view.class);
        if let Some(icon) = child(button, "i") {
            icon.set_class_name(view.icon);
        }
        if let Some(text) = child(button, &class_selector(BUTTON_TEXT_CLASS)) {
            text.set_text_content(Some(&view.label));
        }
    }

    fn update_row_style(&self, button: &Element, new_status: bool) {
        let Ok(Some(row)) = button.closest("tr") else {
            return;
        };
        let style = RowStyle::for_status(new_status);
        if let Err(err) = row
            .class_list()
            .toggle_with_force(ROW_DIMMED_CLASS, style.dimmed)
        {
            report("row class", &err);
        }
        if let Some(row) = row.dyn_ref::<HtmlElement>()
            && let Err(err) = row.style().set_property("opacity", style.opacity())
        {
            report("row opacity", &err);
        }
    }

    fn set_button_loading(&self, button: &Element, loading: bool) {
        set_disabled(button, loading);
        let icon = child(button, "i");
        let text = child(button, &class_selector(BUTTON_TEXT_CLASS));
        if loading {
            let stash = IdleStash {
                icon: icon.as_ref().map(Element::class_name),
                label: text.as_ref().map(|text| text.text_content().unwrap_or_default()),
            };
            for (name, value) in stash.attributes() {
                if let Err(err) = button.set_attribute(name, value) {
                    report("stash idle state", &err);
                }
            }
            if let Some(icon) = &icon {
                icon.set_class_name(LOADING_ICON_CLASS);
            }
            if let Some(text) = &text {
                text.set_text_content(Some(&loading_label(&self.bundle)));
            }
            return;
        }
        if let (Some(icon), Some(idle)) = (&icon, button.get_attribute(ATTR_IDLE_ICON)) {
            icon.set_class_name(&idle);
        }
        if let (Some(text), Some(idle)) = (&text, button.get_attribute(ATTR_IDLE_LABEL)) {
            text.set_text_content(Some(&idle));
        }
        for name in IdleStash::ATTRIBUTES {
            if let Err(err) = button.remove_attribute(name) {
                report("clear idle state", &err);
            }
        }
    }

    fn find_toggle_button(&self, item_id: &str) -> Option<Element> {
        self.document
            .query_selector(&toggle_button_selector(item_id))
            .ok()
            .flatten()
    }

    fn selected_items(&self) -> Vec<String> {
        self.checkboxes(&format!("{}:checked", class_selector(SELECT_ITEM_CLASS)))
            .into_iter()
            .map(|checkbox| checkbox.value())
            .collect()
    }

    fn select_all_in_table(&self, checkbox: &Element) {
        let Some(header) = checkbox.dyn_ref::<HtmlInputElement>() else {
            return;
        };
        let Ok(Some(table)) = checkbox.closest("table") else {
            return;
        };
        let checked = header.checked();
        match table.query_selector_all(&class_selector(SELECT_ITEM_CLASS)) {
            Ok(list) => {
                for item in elements(&list) {
                    if let Some(item) = item.dyn_ref::<HtmlInputElement>() {
                        item.set_checked(checked);
                    }
                }
            }
            Err(err) => report("table items", &err),
        }
    }

    fn clear_selection(&self) {
        let selector = format!(
            "{}, {}",
            class_selector(SELECT_ITEM_CLASS),
            class_selector(SELECT_ALL_CLASS)
        );
        for checkbox in self.checkboxes(&selector) {
            checkbox.set_checked(false);
        }
        self.update_batch_buttons();
    }

    fn update_batch_buttons(&self) {
        let view = BatchButtonsView::for_count(self.selected_items().len());
        for button in self.query_all(&class_selector(BATCH_BUTTON_CLASS)) {
            set_disabled(&button, view.disabled);
            if let Some(count) = child(&button, &class_selector(SELECTED_COUNT_CLASS)) {
                count.set_text_content(Some(&view.count_label));
            }
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn child(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
        return;
    }
    let result = if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    };
    if let Err(err) = result {
        report("disabled flag", &err);
    }
}

fn report(operation: &str, err: &JsValue) {
    warn!(operation, error = ?err, "dom operation failed");
}
