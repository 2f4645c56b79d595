//! Rendering: the drawing-surface abstraction and its 2D-canvas backend.
//!
//! The engine talks to a [`Surface`]; [`CanvasSurface`] is the only place
//! that touches [`web_sys::CanvasRenderingContext2d`]. Everything the frame
//! loop paints is one of three operations: switch compositing, wash the
//! surface with translucent black, or fill a radial glow.
//!
//! All fallible `Canvas2D` calls propagate errors as [`TrailError::Js`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Hsla;
use crate::config::RadiusMode;
use crate::consts::GLOW_MID_STOP;
use crate::error::TrailError;
use crate::particle::{Particle, Point};

/// Canvas compositing modes used by the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Normal painting: new pixels cover old ones.
    SourceOver,
    /// Additive: overlapping glows brighten.
    Lighter,
}

impl Composite {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::Lighter => "lighter",
        }
    }
}

/// One color stop of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowStop {
    /// Position along the radius, `0.0` (center) to `1.0` (edge).
    pub offset: f64,
    pub color: Hsla,
}

/// A filled circle painted with a center-out radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f64,
    pub stops: [GlowStop; 3],
}

impl Glow {
    /// The glow for `particle` at its current life, or `None` if it would
    /// have no visible area.
    #[must_use]
    pub fn for_particle(particle: &Particle, mode: RadiusMode) -> Option<Self> {
        let life = particle.life();
        let radius = match mode {
            RadiusMode::Shrinking => particle.size() * life,
            RadiusMode::Fixed => particle.size(),
        };
        if radius.is_nan() || radius <= 0.0 {
            return None;
        }
        let base = particle.color();
        Some(Self {
            center: particle.position(),
            radius,
            stops: [
                GlowStop { offset: 0.0, color: base.with_alpha(life) },
                GlowStop { offset: GLOW_MID_STOP, color: base.with_alpha(life * 0.5) },
                GlowStop { offset: 1.0, color: base.with_alpha(0.0) },
            ],
        })
    }
}

/// Anything the trail can be painted on.
pub trait Surface {
    /// Backing-store size in pixels.
    fn size(&self) -> (u32, u32);

    /// Set the backing-store size in pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Select the compositing mode for subsequent paints.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the mode.
    fn set_composite(&mut self, mode: Composite) -> Result<(), TrailError>;

    /// Cover the whole surface with black at opacity `alpha`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend call fails.
    fn fade(&mut self, alpha: f64) -> Result<(), TrailError>;

    /// Paint one glow.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the gradient or path cannot be built.
    fn fill_glow(&mut self, glow: &Glow) -> Result<(), TrailError>;
}

/// [`Surface`] backed by an `HtmlCanvasElement` and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`; `None` if the browser refuses one.
    #[must_use]
    pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("cursor trail: getContext(\"2d\") threw: {e:?}");
                return None;
            }
        };
        let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
            return None;
        };
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_composite(&mut self, mode: Composite) -> Result<(), TrailError> {
        self.ctx.set_global_composite_operation(mode.as_css())?;
        Ok(())
    }

    fn fade(&mut self, alpha: f64) -> Result<(), TrailError> {
        let (width, height) = self.size();
        self.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
        self.ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_glow(&mut self, glow: &Glow) -> Result<(), TrailError> {
        let Point { x, y } = glow.center;
        let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, glow.radius)?;
        for stop in &glow.stops {
            gradient.add_color_stop(stop.offset as f32, &stop.color.css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.arc(x, y, glow.radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
