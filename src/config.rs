//! Trail tuning: spawn count, particle size, decay, color scheme and cap.
//!
//! Every knob is a compile-time value gathered into a named [`TrailPreset`].
//! Hosts that need something else can deserialize a [`TrailConfig`] from JSON;
//! missing fields fall back to the default (`comet`) preset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;
use crate::consts::{DEFAULT_MAX_PARTICLES, FADE_ALPHA, MAX_SPAWN_PER_MOVE};
use crate::error::TrailError;

/// Particle size, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SizeSpec {
    Fixed { px: f64 },
    /// Uniform in `[min, max)`.
    Range { min: f64, max: f64 },
}

impl SizeSpec {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::Fixed { px } => px,
            Self::Range { min, max } => min + rng.random::<f64>() * (max - min),
        }
    }
}

/// Radius of the painted glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    /// `size × life`: the glow shrinks as it fades.
    #[default]
    Shrinking,
    /// Always `size`: only the opacity fades.
    Fixed,
}

/// Full description of one trail variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Particles appended per pointer-move event.
    pub spawn_per_move: usize,
    /// Total positional jitter per axis; offsets fall in `±jitter_px / 2`.
    pub jitter_px: f64,
    pub size: SizeSpec,
    pub radius: RadiusMode,
    /// Life removed from every particle per frame.
    pub decay: f64,
    pub color: ColorScheme,
    /// Opacity of the per-frame black wash.
    pub fade_alpha: f64,
    /// Live-particle ceiling; the oldest particles are evicted first.
    /// `None` leaves growth unbounded.
    pub max_particles: Option<usize>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        TrailPreset::Comet.config()
    }
}

impl TrailConfig {
    /// Parse a JSON override and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::ConfigParse`] for malformed JSON and
    /// [`TrailError::InvalidConfig`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, TrailError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the live-particle ceiling.
    #[must_use]
    pub fn with_max_particles(self, max_particles: Option<usize>) -> Self {
        Self { max_particles, ..self }
    }

    /// Check that every value is inside the range the renderer supports.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), TrailError> {
        if !(1..=MAX_SPAWN_PER_MOVE).contains(&self.spawn_per_move) {
            return Err(invalid(format!(
                "spawn_per_move must be 1..={MAX_SPAWN_PER_MOVE}, got {}",
                self.spawn_per_move
            )));
        }
        if self.decay.is_nan() || self.decay <= 0.0 || self.decay > 1.0 {
            return Err(invalid(format!("decay must be in (0, 1], got {}", self.decay)));
        }
        if !self.jitter_px.is_finite() || self.jitter_px < 0.0 {
            return Err(invalid(format!("jitter_px must be >= 0, got {}", self.jitter_px)));
        }
        if !(0.0..=1.0).contains(&self.fade_alpha) {
            return Err(invalid(format!("fade_alpha must be in [0, 1], got {}", self.fade_alpha)));
        }
        match self.size {
            SizeSpec::Fixed { px } if px.is_nan() || px <= 0.0 => {
                return Err(invalid(format!("size must be > 0, got {px}")));
            }
            SizeSpec::Range { min, max } if min.is_nan() || max.is_nan() || min <= 0.0 || max < min => {
                return Err(invalid(format!("size range must satisfy 0 < min <= max, got {min}..{max}")));
            }
            _ => {}
        }
        if self.max_particles == Some(0) {
            return Err(invalid("max_particles must be positive when set".to_owned()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> TrailError {
    TrailError::InvalidConfig(message)
}

/// Named trail variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailPreset {
    /// Bulky multicolor comet: 8 particles per move, long tail.
    #[default]
    Comet,
    /// Thin hue-cycling ribbon.
    Rainbow,
    /// One fixed-radius dot per move with a short tail.
    Spark,
}

impl TrailPreset {
    pub const ALL: [Self; 3] = [Self::Comet, Self::Rainbow, Self::Spark];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Comet => "comet",
            Self::Rainbow => "rainbow",
            Self::Spark => "spark",
        }
    }

    #[must_use]
    pub fn config(self) -> TrailConfig {
        let base = TrailConfig {
            spawn_per_move: MAX_SPAWN_PER_MOVE,
            jitter_px: 8.0,
            size: SizeSpec::Range { min: 4.0, max: 12.0 },
            radius: RadiusMode::Shrinking,
            decay: 0.02,
            color: ColorScheme::Palette,
            fade_alpha: FADE_ALPHA,
            max_particles: Some(DEFAULT_MAX_PARTICLES),
        };
        match self {
            Self::Comet => base,
            Self::Rainbow => TrailConfig {
                spawn_per_move: 3,
                jitter_px: 4.0,
                size: SizeSpec::Fixed { px: 6.0 },
                decay: 0.03,
                color: ColorScheme::Elapsed,
                ..base
            },
            Self::Spark => TrailConfig {
                spawn_per_move: 1,
                jitter_px: 0.0,
                size: SizeSpec::Fixed { px: 10.0 },
                radius: RadiusMode::Fixed,
                decay: 0.05,
                color: ColorScheme::Elapsed,
                ..base
            },
        }
    }
}

impl fmt::Display for TrailPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrailPreset {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| TrailError::UnknownPreset(s.to_owned()))
    }
}
