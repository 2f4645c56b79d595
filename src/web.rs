//! JavaScript entry points.
//!
//! ```js
//! import init, { startCursorTrail } from "./pkg/cursor_trail.js";
//! await init();
//! const trail = startCursorTrail("comet");
//! // later
//! trail.stop();
//! ```

use wasm_bindgen::prelude::*;

use crate::config::{TrailConfig, TrailPreset};
use crate::engine::RunState;
use crate::error::TrailError;
use crate::mount::TrailHandle;
use crate::overlay::{OverlayGuard, create_overlay, mount_on_overlay};

/// A trail started from JavaScript, together with the overlay it created.
///
/// Both `stop()` and `free()` unmount the trail and take the overlay off the
/// page.
#[wasm_bindgen]
pub struct CursorTrail {
    handle: Option<TrailHandle>,
    overlay: Option<OverlayGuard>,
}

#[wasm_bindgen]
impl CursorTrail {
    /// Whether the trail is mounted and animating.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| handle.state() == RunState::Running)
    }

    /// Live particle count.
    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.handle.as_ref().map_or(0, TrailHandle::particle_count)
    }

    /// Unmount the trail and remove its overlay. Safe to call twice.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.unmount();
        }
        if let Some(mut overlay) = self.overlay.take() {
            overlay.remove();
        }
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start a trail with a named preset (`comet`, `rainbow`, `spark`).
///
/// In a page that cannot host a 2D canvas the returned trail is inert:
/// `running` is `false` and nothing is drawn.
///
/// # Errors
///
/// Throws for an unknown preset or a failed DOM call.
#[wasm_bindgen(js_name = startCursorTrail)]
pub fn start_cursor_trail(preset: Option<String>) -> Result<CursorTrail, JsValue> {
    let preset = match preset.as_deref() {
        Some(name) => name.parse::<TrailPreset>()?,
        None => TrailPreset::default(),
    };
    Ok(start(preset.config())?)
}

/// Start a trail from a JSON [`TrailConfig`]; absent fields take the
/// default preset's values.
///
/// # Errors
///
/// Throws for malformed or out-of-range configuration, or a failed DOM call.
#[wasm_bindgen(js_name = startCursorTrailWithConfig)]
pub fn start_cursor_trail_with_config(config_json: &str) -> Result<CursorTrail, JsValue> {
    let config = TrailConfig::from_json(config_json)?;
    Ok(start(config)?)
}

fn start(config: TrailConfig) -> Result<CursorTrail, TrailError> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::debug!("cursor trail: no document, staying inert");
        return Ok(CursorTrail { handle: None, overlay: None });
    };
    let overlay = create_overlay(&document)?;
    let mounted = mount_on_overlay(overlay, |canvas| TrailHandle::mount(canvas.clone(), config))?;
    Ok(match mounted {
        Some((handle, overlay)) => CursorTrail { handle: Some(handle), overlay: Some(overlay) },
        None => CursorTrail { handle: None, overlay: None },
    })
}
