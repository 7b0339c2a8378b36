//! Delegated event routing table.
//!
//! # Design
//! - Every listener hangs off `document`, so rows rendered after startup are
//!   handled without rebinding.
//! - The table is data: the DOM layer walks it, tests assert on it.

use crate::core::markup::{
    BATCH_BUTTON_CLASS, SELECT_ALL_CLASS, SELECT_ITEM_CLASS, TOGGLE_BUTTON_CLASS,
};

/// User interactions the component reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Click on a single-item toggle button.
    Toggle,
    /// Change of a table's select-all checkbox.
    SelectAll,
    /// Change of one item checkbox.
    SelectItem,
    /// Click on a batch action button.
    BatchToggle,
}

/// How the event target is matched against a route's class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetMatch {
    /// The target itself must carry the class.
    Exact,
    /// The target or its nearest ancestor carrying the class.
    Closest,
}

/// One delegated listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// DOM event type.
    pub event: &'static str,
    /// Class the target must carry.
    pub class: &'static str,
    /// Matching strategy.
    pub matching: TargetMatch,
    /// Whether the browser's default action is suppressed.
    pub prevent_default: bool,
    /// Handler the event is dispatched to.
    pub interaction: Interaction,
}

/// Routes installed by the router, in dispatch order.
pub const ROUTES: [Route; 4] = [
    Route {
        event: "click",
        class: TOGGLE_BUTTON_CLASS,
        matching: TargetMatch::Closest,
        prevent_default: true,
        interaction: Interaction::Toggle,
    },
    Route {
        event: "change",
        class: SELECT_ALL_CLASS,
        matching: TargetMatch::Exact,
        prevent_default: false,
        interaction: Interaction::SelectAll,
    },
    Route {
        event: "change",
        class: SELECT_ITEM_CLASS,
        matching: TargetMatch::Exact,
        prevent_default: false,
        interaction: Interaction::SelectItem,
    },
    Route {
        event: "click",
        class: BATCH_BUTTON_CLASS,
        matching: TargetMatch::Closest,
        prevent_default: true,
        interaction: Interaction::BatchToggle,
    },
];
