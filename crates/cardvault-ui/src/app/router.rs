//! Delegated event router.
//!
//! One listener per entry of [`ROUTES`], all on `document`. A thread-local
//! slot holds the installed router so attaching twice is a no-op.

use crate::core::markup::class_selector;
use crate::core::routes::{Interaction, ROUTES, Route, TargetMatch};
use crate::dom::DomPage;
use crate::flows::{StatusPage, StatusToggle};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

type Toggle = Rc<StatusToggle<DomPage>>;

thread_local! {
    static ROUTER: RefCell<Option<Router>> = const { RefCell::new(None) };
}

struct Router {
    _listeners: Vec<EventListener>,
}

/// Install the listeners unless a router is already attached.
///
/// Returns whether this call attached.
pub(crate) fn attach_once(toggle: &Toggle) -> bool {
    ROUTER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(Router::attach(toggle));
        true
    })
}

/// Remove the listeners; returns whether a router was attached.
pub(crate) fn detach() -> bool {
    ROUTER.with(|slot| slot.borrow_mut().take().is_some())
}

impl Router {
    fn attach(toggle: &Toggle) -> Self {
        let target = document();
        let listeners = ROUTES
            .iter()
            .copied()
            .map(|route| {
                let toggle = Rc::clone(toggle);
                let options = if route.prevent_default {
                    EventListenerOptions::enable_prevent_default()
                } else {
                    EventListenerOptions::default()
                };
                EventListener::new_with_options(&target, route.event, options, move |event| {
                    dispatch(&toggle, route, event);
                })
            })
            .collect();
        toggle.page().update_batch_buttons();
        Self {
            _listeners: listeners,
        }
    }
}

fn matched_element(route: Route, event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let selector = class_selector(route.class);
    match route.matching {
        TargetMatch::Exact => target.matches(&selector).ok()?.then_some(target),
        TargetMatch::Closest => target.closest(&selector).ok().flatten(),
    }
}

fn dispatch(toggle: &Toggle, route: Route, event: &Event) {
    let Some(element) = matched_element(route, event) else {
        return;
    };
    if route.prevent_default {
        event.prevent_default();
    }
    debug!(interaction = ?route.interaction, event = route.event, "dispatch");
    match route.interaction {
        Interaction::Toggle => {
            let toggle = Rc::clone(toggle);
            spawn_local(async move { toggle.handle_toggle(&element).await });
        }
        Interaction::BatchToggle => {
            let toggle = Rc::clone(toggle);
            spawn_local(async move {
                toggle.handle_batch_toggle(&element).await;
            });
        }
        Interaction::SelectAll => toggle.handle_select_all(&element),
        Interaction::SelectItem => toggle.handle_item_selected(),
    }
}
