//! The full-viewport overlay canvas the trail is painted on.
//!
//! The overlay covers the window, sits above the page background and below
//! interactive content, and never receives pointer events.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::consts::OVERLAY_Z_INDEX;
use crate::error::TrailError;

/// CSS class set on the overlay element.
pub const OVERLAY_CLASS: &str = "cursor-trail";

/// Inline style of the overlay, as property/value pairs.
pub const OVERLAY_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", OVERLAY_Z_INDEX),
];

/// [`OVERLAY_STYLE`] as a `style` attribute value.
#[must_use]
pub fn overlay_style_attr() -> String {
    OVERLAY_STYLE
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create the overlay canvas and append it to `<body>`.
///
/// # Errors
///
/// Returns [`TrailError::Js`] if the element cannot be created, styled or
/// attached, or if the document has no body.
pub fn create_overlay(document: &Document) -> Result<HtmlCanvasElement, TrailError> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TrailError::Js("created element is not a canvas".to_owned()))?;
    canvas.set_class_name(OVERLAY_CLASS);
    canvas.set_attribute("aria-hidden", "true")?;
    let style = canvas.style();
    for (property, value) in OVERLAY_STYLE {
        style.set_property(property, value)?;
    }
    let Some(body) = document.body() else {
        return Err(TrailError::Js("document has no body".to_owned()));
    };
    body.append_child(&canvas)?;
    Ok(canvas)
}

/// A node the trail attached to the page and has to take off again.
pub trait Detach {
    fn detach(&self);
}

impl Detach for HtmlCanvasElement {
    fn detach(&self) {
        self.remove();
    }
}

/// Owns an attached overlay; the overlay leaves the page when the guard is
/// dropped or [`OverlayGuard::remove`] is called, whichever comes first.
pub struct OverlayGuard<E: Detach = HtmlCanvasElement> {
    element: E,
    attached: bool,
}

impl<E: Detach> OverlayGuard<E> {
    /// Take ownership of an already attached `element`.
    #[must_use]
    pub fn new(element: E) -> Self {
        Self { element, attached: true }
    }

    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach now. Idempotent.
    pub fn remove(&mut self) {
        if std::mem::replace(&mut self.attached, false) {
            self.element.detach();
        }
    }
}

/// Run `mount` against an attached overlay and keep the overlay only when
/// `mount` produced something; on `Err` or `Ok(None)` it is detached again.
///
/// # Errors
///
/// Propagates the error from `mount`.
pub fn mount_on_overlay<E, T, F>(element: E, mount: F) -> Result<Option<(T, OverlayGuard<E>)>, TrailError>
where
    E: Detach,
    F: FnOnce(&E) -> Result<Option<T>, TrailError>,
{
    let guard = OverlayGuard::new(element);
    Ok(mount(guard.element())?.map(|mounted| (mounted, guard)))
}

impl<E: Detach> Drop for OverlayGuard<E> {
    fn drop(&mut self) {
        self.remove();
    }
}
