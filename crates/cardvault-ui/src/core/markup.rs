//! Class and attribute names shared with the server-rendered markup.
//!
//! These strings are the whole contract between the templates and this crate;
//! renaming one here without touching the templates silently disables a feature.

/// Single-item toggle button.
pub const TOGGLE_BUTTON_CLASS: &str = "status-toggle-btn";
/// Header checkbox selecting every item of its table.
pub const SELECT_ALL_CLASS: &str = "batch-select-all";
/// Per-row selection checkbox; its `value` is the item id.
pub const SELECT_ITEM_CLASS: &str = "batch-select-item";
/// Batch action button.
pub const BATCH_BUTTON_CLASS: &str = "batch-toggle-btn";
/// Label element inside a button.
pub const BUTTON_TEXT_CLASS: &str = "btn-text";
/// Optional count placeholder inside a batch button.
pub const SELECTED_COUNT_CLASS: &str = "selected-count";

/// Item identifier attribute.
pub const ATTR_ITEM_ID: &str = "data-item-id";
/// Item kind attribute (`api_key` | `card`).
pub const ATTR_ITEM_TYPE: &str = "data-item-type";
/// Last server-confirmed status (`"true"` | `"false"`).
pub const ATTR_CURRENT_STATUS: &str = "data-current-status";
/// Batch action attribute (`enable` | `disable`).
pub const ATTR_ACTION: &str = "data-action";
/// Icon class saved while a button shows its busy state.
pub const ATTR_IDLE_ICON: &str = "data-idle-icon";
/// Label saved while a button shows its busy state.
pub const ATTR_IDLE_LABEL: &str = "data-idle-label";

/// CSS selector matching elements that carry `class`.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

/// Selector for the toggle button of one item.
///
/// The id is quoted with `"` and `\` escaped so arbitrary identifiers cannot
/// break out of the attribute value.
#[must_use]
pub fn toggle_button_selector(item_id: &str) -> String {
    format!(
        "[{ATTR_ITEM_ID}=\"{}\"].{TOGGLE_BUTTON_CLASS}",
        escape_attr_value(item_id)
    )
}

fn escape_attr_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
