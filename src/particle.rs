//! Particle model and the live-particle store.
//!
//! A particle is spawned at full life, never moves, and loses a fixed amount
//! of life each frame until it expires. The store keeps particles in spawn
//! order (oldest first) so that the renderer can walk them newest-first and
//! the cap can evict from the front.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use crate::color::Hsla;

/// A point in CSS pixels, relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// One glowing dot of the trail.
///
/// Position, color and size are fixed at spawn; only the store can age it.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Point,
    life: f64,
    /// Frames survived so far.
    age: u32,
    color: Hsla,
    size: f64,
}

impl Particle {
    /// A freshly spawned particle at full life.
    #[must_use]
    pub fn new(position: Point, color: Hsla, size: f64) -> Self {
        Self { position, life: 1.0, age: 0, color, size }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Remaining life in `[0, 1]`; `1.0` at spawn.
    #[must_use]
    pub fn life(&self) -> f64 {
        self.life
    }

    /// Base (opaque) color.
    #[must_use]
    pub fn color(&self) -> Hsla {
        self.color
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }
}

/// Live particles in spawn order, with an optional ceiling.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    cap: Option<usize>,
}

impl ParticleStore {
    #[must_use]
    pub fn new(cap: Option<usize>) -> Self {
        Self { particles: Vec::new(), cap }
    }

    #[must_use]
    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Append a particle, evicting the oldest ones past the cap.
    ///
    /// Returns how many particles were evicted.
    pub fn push(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.enforce_cap()
    }

    /// Advance every particle by one frame, newest first.
    ///
    /// `visit` sees each particle with the life it had at the start of the
    /// frame; afterwards its life drops by `decay` and it is removed once it
    /// has lived [`frames_to_expire`] frames. Survivors keep their relative
    /// order. Returns the number of particles removed.
    pub fn step<F>(&mut self, decay: f64, mut visit: F) -> usize
    where
        F: FnMut(&Particle),
    {
        let lifespan = frames_to_expire(decay);
        let before = self.particles.len();
        for i in (0..self.particles.len()).rev() {
            visit(&self.particles[i]);
            let particle = &mut self.particles[i];
            particle.age = particle.age.saturating_add(1);
            if particle.age >= lifespan {
                self.particles.remove(i);
            } else {
                // Derived from the age so repeated subtraction cannot drift.
                particle.life = (1.0 - f64::from(particle.age) * decay).max(0.0);
            }
        }
        before - self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn enforce_cap(&mut self) -> usize {
        let Some(cap) = self.cap else {
            return 0;
        };
        let excess = self.particles.len().saturating_sub(cap);
        if excess > 0 {
            self.particles.drain(..excess);
        }
        excess
    }
}

/// Frames a particle lives at `decay` life per frame: `ceil(1 / decay)`.
///
/// Non-positive or NaN decay never expires; tiny decay saturates at `u32::MAX`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn frames_to_expire(decay: f64) -> u32 {
    if decay.is_nan() || decay <= 0.0 {
        return u32::MAX;
    }
    (1.0 / decay).ceil().clamp(1.0, f64::from(u32::MAX)) as u32
}
