use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::TrailConfig;
use crate::error::TrailError;
use crate::particle::{Particle, ParticleStore, Point};
use crate::render::{Composite, Glow, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Lifecycle of a trail instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No listeners, no scheduled work. Initial and terminal.
    #[default]
    Stopped,
    /// Listeners attached and the frame loop scheduled.
    Running,
}

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Glows painted.
    pub drawn: usize,
    /// Particles that expired this frame.
    pub removed: usize,
    /// Particles still alive after the frame.
    pub live: usize,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    config: TrailConfig,
    particles: ParticleStore,
    rng: SmallRng,
    state: RunState,
    started_ms: f64,
    frames: u64,
}

impl EngineCore {
    /// Build a stopped core.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: TrailConfig, seed: u64) -> Result<Self, TrailError> {
        config.validate()?;
        Ok(Self {
            config,
            particles: ParticleStore::new(config.max_particles),
            rng: SmallRng::seed_from_u64(seed),
            state: RunState::Stopped,
            started_ms: 0.0,
            frames: 0,
        })
    }

    // --- Lifecycle ---

    /// Enter `Running`; elapsed-time colors count from `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.state = RunState::Running;
        self.started_ms = now_ms;
        self.frames = 0;
    }

    /// Enter `Stopped` and drop every live particle.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.particles.clear();
    }

    // --- Inputs ---

    /// Spawn `spawn_per_move` particles around `at`.
    ///
    /// Returns how many of the new particles are live afterwards: zero while
    /// stopped, fewer than `spawn_per_move` when the cap is smaller.
    pub fn on_pointer_move(&mut self, at: Point, now_ms: f64) -> usize {
        if self.state != RunState::Running {
            return 0;
        }
        let elapsed_ms = now_ms - self.started_ms;
        let jitter = self.config.jitter_px;
        for _ in 0..self.config.spawn_per_move {
            let dx = (self.rng.random::<f64>() - 0.5) * jitter;
            let dy = (self.rng.random::<f64>() - 0.5) * jitter;
            let color = self.config.color.pick(elapsed_ms, &mut self.rng);
            let size = self.config.size.sample(&mut self.rng);
            self.particles.push(Particle::new(at.offset(dx, dy), color, size));
        }
        let spawned = self.config.spawn_per_move;
        self.particles.cap().map_or(spawned, |cap| spawned.min(cap))
    }

    /// Paint and age one frame onto `surface`.
    ///
    /// Returns `Ok(None)` without touching the surface while stopped. A failing
    /// paint does not stop the frame: every particle is still aged, and the
    /// first error is returned afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `surface` during the frame.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<Option<FrameStats>, TrailError> {
        if self.state != RunState::Running {
            return Ok(None);
        }
        self.frames += 1;

        let mut failure = surface
            .set_composite(Composite::SourceOver)
            .and_then(|()| surface.fade(self.config.fade_alpha))
            .and_then(|()| surface.set_composite(Composite::Lighter))
            .err();

        let mode = self.config.radius;
        let mut drawn = 0;
        let removed = self.particles.step(self.config.decay, |particle| {
            let Some(glow) = Glow::for_particle(particle, mode) else {
                return;
            };
            match surface.fill_glow(&glow) {
                Ok(()) => drawn += 1,
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(Some(FrameStats { drawn, removed, live: self.particles.len() })),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    /// Frames rendered since the last `start`.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// The full trail engine: an [`EngineCore`] plus the surface it paints on.
pub struct Engine<S: Surface> {
    surface: S,
    pub core: EngineCore,
}

impl<S: Surface> Engine<S> {
    /// Create a stopped engine bound to `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidConfig`] if `config` fails validation.
    pub fn new(surface: S, config: TrailConfig, seed: u64) -> Result<Self, TrailError> {
        Ok(Self { surface, core: EngineCore::new(config, seed)? })
    }

    /// Size the surface to the viewport and enter `Running`.
    pub fn start(&mut self, width: u32, height: u32, now_ms: f64) {
        self.core.start(now_ms);
        self.resize(width, height);
    }

    /// Match the surface to the viewport. Ignored while stopped.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.core.state() != RunState::Running {
            return;
        }
        self.surface.resize(width, height);
    }

    pub fn on_pointer_move(&mut self, at: Point, now_ms: f64) -> usize {
        self.core.on_pointer_move(at, now_ms)
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns the first surface error of the frame.
    pub fn frame(&mut self) -> Result<Option<FrameStats>, TrailError> {
        self.core.frame(&mut self.surface)
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.core.state()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
