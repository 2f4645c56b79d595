//! Scoped DOM event subscriptions.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::TrailError;

/// A listener registered on a shared target (`window`, `document`).
///
/// The listener is attached on construction and removed when the value is
/// dropped, so it cannot outlive the engine its callback points into.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Js`] if the browser rejects the listener.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, TrailError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("cursor trail: removing {} listener failed: {e:?}", self.event);
        }
    }
}
