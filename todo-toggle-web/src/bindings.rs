//! Click listeners on the task items found under a root element.

use std::rc::Rc;

use todo_toggle_core::{ToggleConfig, ToggleHandler, ToggleTransport};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::element::DomTaskItem;

const CLICK: &str = "click";

struct Listener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners installed by [`install`]. Dropping the bindings detaches them;
/// [`ToggleBindings::leak`] keeps them for the rest of the page's life.
pub struct ToggleBindings {
    listeners: Vec<Listener>,
}

impl ToggleBindings {
    /// Number of task items that received a listener.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Keep every listener alive without holding on to the bindings.
    pub fn leak(mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener.callback.forget();
        }
    }
}

impl Drop for ToggleBindings {
    fn drop(&mut self) {
        for listener in &self.listeners {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                CLICK,
                listener.callback.as_ref().unchecked_ref(),
            ) {
                log::warn!(
                    "could not detach toggle listener: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        }
    }
}

impl std::fmt::Debug for ToggleBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleBindings")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Attach one click listener to every task item under `root` that exists now.
/// Items added later are not bound.
///
/// # Errors
/// Returns an error if the item selector is invalid or a listener cannot be
/// registered.
pub fn install<T>(
    root: &Element,
    config: ToggleConfig,
    csrf_token: Option<String>,
    transport: T,
) -> Result<ToggleBindings, JsValue>
where
    T: ToggleTransport + 'static,
{
    let items = root.query_selector_all(&config.item_selector)?;
    let handler = Rc::new(ToggleHandler::new(config, csrf_token, transport));
    if handler.csrf_token().is_none() {
        log::warn!(
            "no {} cookie found; toggles will be sent without a CSRF header",
            handler.config().csrf_cookie
        );
    }

    // Pushed as they are registered so an early return detaches the rest.
    let mut bindings = ToggleBindings {
        listeners: Vec::with_capacity(items.length() as usize),
    };
    for index in 0..items.length() {
        let Some(element) = items.item(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let item = DomTaskItem::new(element.clone());
        let handler = Rc::clone(&handler);
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let handler = Rc::clone(&handler);
            let item = item.clone();
            spawn_local(async move {
                handler.handle_click(&item).await;
            });
        });
        element.add_event_listener_with_callback(CLICK, callback.as_ref().unchecked_ref())?;
        bindings.listeners.push(Listener {
            target: element,
            callback,
        });
    }

    log::debug!("bound toggle listeners to {} task items", bindings.len());
    Ok(bindings)
}
