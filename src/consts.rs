//! Shared numeric constants for the cursor trail.

// ── Frame ───────────────────────────────────────────────────────

/// Opacity of the black wash painted over the surface each frame.
pub const FADE_ALPHA: f64 = 0.05;

/// Gradient stop offset for the half-alpha ring.
pub const GLOW_MID_STOP: f64 = 0.5;

// ── Spawn ───────────────────────────────────────────────────────

/// Largest number of particles a single pointer move may spawn.
pub const MAX_SPAWN_PER_MOVE: usize = 8;

/// Default ceiling on live particles shared by every preset.
pub const DEFAULT_MAX_PARTICLES: usize = 600;

// ── Color ───────────────────────────────────────────────────────

/// Width in degrees of each palette hue band.
pub const HUE_BAND_WIDTH: f64 = 60.0;

/// Starting hue of each palette band, in the order the palette lists them.
pub const PALETTE_BAND_STARTS: [f64; 6] = [0.0, 120.0, 240.0, 300.0, 60.0, 180.0];

/// Saturation (percent) of generated trail colors.
pub const TRAIL_SATURATION: f64 = 90.0;

/// Lightness (percent) of generated trail colors.
pub const TRAIL_LIGHTNESS: f64 = 70.0;

// ── Overlay ─────────────────────────────────────────────────────

/// Stacking order of the overlay: above the page background, below content.
pub const OVERLAY_Z_INDEX: &str = "1";
