//! Display-refresh task handle.
//!
//! `FrameLoop` owns the `requestAnimationFrame` callback and the id of the
//! pending request. Each tick runs the work and then books the next tick;
//! `stop` cancels whatever is booked, so no tick runs after it returns.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::TrailError;

struct LoopInner {
    window: Window,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request(&self) -> Result<(), TrailError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cursor trail: cancelAnimationFrame({id}) failed: {e:?}");
            }
        }
    }
}

/// A repeating task bound to the display refresh signal.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    /// Book the first tick; `tick` then runs once per displayed frame with the
    /// frame timestamp until [`FrameLoop::stop`].
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Js`] if the first frame cannot be requested.
    pub fn start<F>(window: Window, mut tick: F) -> Result<Self, TrailError>
    where
        F: FnMut(f64) + 'static,
    {
        let inner = Rc::new(LoopInner {
            window,
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The callback only holds a weak reference; the loop owns the callback.
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            tick(timestamp);
            if inner.running.get() {
                if let Err(e) = inner.request() {
                    log::warn!("cursor trail: requestAnimationFrame failed, loop halted: {e}");
                    inner.running.set(false);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.callback.borrow_mut() = Some(callback);
        inner.request()?;
        Ok(Self { inner })
    }

    /// Cancel the booked tick. Idempotent.
    pub fn stop(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.callback.borrow_mut().take();
    }
}
