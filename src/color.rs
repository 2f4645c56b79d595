//! Structured trail colors.
//!
//! Colors are kept as HSLA channels and only turned into CSS text at the
//! moment they are handed to the canvas. Translucent variants come from
//! [`Hsla::with_alpha`], never from editing a formatted string.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{HUE_BAND_WIDTH, PALETTE_BAND_STARTS, TRAIL_LIGHTNESS, TRAIL_SATURATION};

/// Hue / saturation / lightness / alpha color.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages, `a` is `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    /// Opaque color; the hue wraps into `[0, 360)`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h: h.rem_euclid(360.0), s, l, a: 1.0 }
    }

    /// Opaque trail color at the given hue.
    #[must_use]
    pub fn trail(h: f64) -> Self {
        Self::new(h, TRAIL_SATURATION, TRAIL_LIGHTNESS)
    }

    /// Same color with its alpha replaced, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// CSS `hsla(...)` text understood by `CanvasRenderingContext2d`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

/// How each spawned particle picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorScheme {
    /// Hue follows elapsed milliseconds since mount, wrapping every 360 ms.
    Elapsed,
    /// One of six 60° hue bands at random, random hue inside the band.
    Palette,
    /// Every particle gets the same color.
    Fixed { color: Hsla },
}

impl ColorScheme {
    /// Pick the color for one particle spawned `elapsed_ms` after mount.
    pub fn pick<R: Rng>(&self, elapsed_ms: f64, rng: &mut R) -> Hsla {
        match self {
            Self::Elapsed => Hsla::trail(elapsed_ms.max(0.0) % 360.0),
            Self::Palette => {
                let band = PALETTE_BAND_STARTS[rng.random_range(0..PALETTE_BAND_STARTS.len())];
                Hsla::trail(band + rng.random::<f64>() * HUE_BAND_WIDTH)
            }
            Self::Fixed { color } => *color,
        }
    }
}
