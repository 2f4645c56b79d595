//! Mounting the engine in a browser page.
//!
//! [`TrailHandle`] is the running trail: it owns the engine, the `resize` and
//! `pointermove` subscriptions, and the frame loop. Dropping it (or calling
//! [`TrailHandle::unmount`]) detaches everything at once.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::config::TrailConfig;
use crate::engine::{Engine, RunState};
use crate::error::TrailError;
use crate::frame_loop::FrameLoop;
use crate::listener::EventSubscription;
use crate::particle::Point;
use crate::render::CanvasSurface;

type SharedEngine = Rc<RefCell<Engine<CanvasSurface>>>;

/// A mounted, running cursor trail.
pub struct TrailHandle {
    engine: SharedEngine,
    frame_loop: Option<FrameLoop>,
    subscriptions: Vec<EventSubscription>,
}

impl TrailHandle {
    /// Mount the trail on `canvas` and start it.
    ///
    /// Returns `Ok(None)` when the page cannot host it (no window, no
    /// document, no 2D context); nothing is attached in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidConfig`] for a bad `config`, or
    /// [`TrailError::Js`] if a listener or the first frame cannot be
    /// registered.
    pub fn mount(canvas: HtmlCanvasElement, config: TrailConfig) -> Result<Option<Self>, TrailError> {
        config.validate()?;
        let Some(window) = web_sys::window() else {
            log::debug!("cursor trail: no window, not mounting");
            return Ok(None);
        };
        let Some(document) = window.document() else {
            log::debug!("cursor trail: no document, not mounting");
            return Ok(None);
        };
        let Some(surface) = CanvasSurface::acquire(canvas) else {
            log::debug!("cursor trail: 2d context unavailable, not mounting");
            return Ok(None);
        };

        let now = now_ms(&window);
        let mut engine = Engine::new(surface, config, entropy_seed(now))?;
        let (width, height) = viewport_size(&window);
        engine.start(width, height, now);
        let engine: SharedEngine = Rc::new(RefCell::new(engine));

        let resize = {
            let engine = Rc::clone(&engine);
            let win = window.clone();
            EventSubscription::new(&window, "resize", move |_event| {
                let (width, height) = viewport_size(&win);
                engine.borrow_mut().resize(width, height);
            })?
        };

        let pointer = {
            let engine = Rc::clone(&engine);
            let win = window.clone();
            EventSubscription::new(&document, "pointermove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let at = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                engine.borrow_mut().on_pointer_move(at, now_ms(&win));
            })?
        };

        let frame_loop = {
            let engine = Rc::clone(&engine);
            FrameLoop::start(window, move |_timestamp| {
                if let Err(e) = engine.borrow_mut().frame() {
                    log::warn!("cursor trail: frame failed: {e}");
                }
            })?
        };

        log::debug!("cursor trail: mounted at {width}x{height}");
        Ok(Some(Self { engine, frame_loop: Some(frame_loop), subscriptions: vec![resize, pointer] }))
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.engine
            .try_borrow()
            .map_or(RunState::Running, |engine| engine.state())
    }

    /// Live particle count.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.engine
            .try_borrow()
            .map_or(0, |engine| engine.core.particles().len())
    }

    /// Detach listeners, cancel the frame loop and drop the particles.
    pub fn unmount(self) {
        drop(self);
    }

    fn teardown(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        self.subscriptions.clear();
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.stop();
        }
    }
}

impl Drop for TrailHandle {
    fn drop(&mut self) {
        self.teardown();
        log::debug!("cursor trail: unmounted");
    }
}

/// Current viewport size in whole CSS pixels.
fn viewport_size(window: &Window) -> (u32, u32) {
    (viewport_px(window.inner_width()), viewport_px(window.inner_height()))
}

/// Convert an `innerWidth` / `innerHeight` read into a canvas dimension.
fn viewport_px(read: Result<JsValue, JsValue>) -> u32 {
    match read {
        Ok(value) => css_px_to_dim(value.as_f64()),
        Err(e) => {
            log::warn!("cursor trail: viewport size unavailable: {e:?}");
            0
        }
    }
}

/// Round a CSS pixel length to a backing-store dimension; junk reads as 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn css_px_to_dim(px: Option<f64>) -> u32 {
    px.filter(|px| px.is_finite())
        .map_or(0, |px| px.clamp(0.0, f64::from(u32::MAX)).round() as u32)
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}

fn entropy_seed(now: f64) -> u64 {
    js_sys::Math::random().to_bits() ^ now.to_bits().rotate_left(17)
}
