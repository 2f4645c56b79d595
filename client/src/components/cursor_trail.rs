//! Bridge component between Leptos and the imperative `cursor_trail` engine.
//!
//! The component renders the overlay `<canvas>`; once the element exists it
//! mounts a [`TrailHandle`] on it, and the component's cleanup unmounts it.
//! If the page cannot host a 2D canvas the mount is a silent no-op and the
//! canvas simply stays blank.

use cursor_trail::overlay::{OVERLAY_CLASS, overlay_style_attr};
use cursor_trail::{TrailConfig, TrailHandle, TrailPreset};
use leptos::prelude::*;

/// Full-viewport glowing cursor trail.
///
/// `preset` picks a named variant; `config`, when given, overrides it.
#[component]
pub fn CursorTrail(
    #[prop(optional)] preset: TrailPreset,
    #[prop(optional)] config: Option<TrailConfig>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let handle = StoredValue::new_local(None::<TrailHandle>);
    let config = config.unwrap_or_else(|| preset.config());

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if handle.with_value(Option::is_some) {
            return;
        }
        match TrailHandle::mount(canvas, config) {
            Ok(Some(mounted)) => handle.set_value(Some(mounted)),
            Ok(None) => leptos::logging::log!("cursor trail: unsupported page, overlay left blank"),
            Err(e) => leptos::logging::warn!("cursor trail: mount failed: {e}"),
        }
    });

    on_cleanup(move || {
        handle.update_value(|slot| {
            if let Some(mounted) = slot.take() {
                mounted.unmount();
            }
        });
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class=OVERLAY_CLASS
            style=overlay_style_attr()
            aria-hidden="true"
        ></canvas>
    }
}
