#![allow(clippy::float_cmp)]

use super::*;

fn particle_at(x: f64) -> Particle {
    Particle::new(Point::new(x, 0.0), Hsla::trail(0.0), 4.0)
}

fn xs(store: &ParticleStore) -> Vec<f64> {
    store.iter().map(|p| p.position().x).collect()
}

// --- Point ---

#[test]
fn point_offset() {
    assert_eq!(Point::new(1.0, 2.0).offset(3.0, -4.0), Point::new(4.0, -2.0));
}

// --- Particle ---

#[test]
fn new_particle_has_full_life() {
    let p = particle_at(10.0);
    assert_eq!(p.life(), 1.0);
    assert_eq!(p.age(), 0);
}

#[test]
fn frames_to_expire_is_ceil_of_inverse_decay() {
    assert_eq!(frames_to_expire(0.02), 50);
    assert_eq!(frames_to_expire(0.03), 34);
    assert_eq!(frames_to_expire(1.0), 1);
    assert_eq!(frames_to_expire(0.0), u32::MAX);
    assert_eq!(frames_to_expire(f64::NAN), u32::MAX);
    assert_eq!(frames_to_expire(f64::MIN_POSITIVE), u32::MAX);
}

// --- Store: push and cap ---

#[test]
fn push_keeps_spawn_order() {
    let mut store = ParticleStore::new(None);
    for x in [1.0, 2.0, 3.0] {
        store.push(particle_at(x));
    }
    assert_eq!(xs(&store), vec![1.0, 2.0, 3.0]);
}

#[test]
fn uncapped_store_grows_without_limit() {
    let mut store = ParticleStore::new(None);
    for i in 0..5000 {
        assert_eq!(store.push(particle_at(f64::from(i))), 0);
    }
    assert_eq!(store.len(), 5000);
}

#[test]
fn cap_evicts_oldest_first() {
    let mut store = ParticleStore::new(Some(3));
    for x in [1.0, 2.0, 3.0] {
        assert_eq!(store.push(particle_at(x)), 0);
    }
    assert_eq!(store.push(particle_at(4.0)), 1);
    assert_eq!(store.push(particle_at(5.0)), 1);
    assert_eq!(xs(&store), vec![3.0, 4.0, 5.0]);
    assert_eq!(store.cap(), Some(3));
}

#[test]
fn clear_empties_store() {
    let mut store = ParticleStore::new(None);
    store.push(particle_at(1.0));
    store.clear();
    assert!(store.is_empty());
}

// --- Store: step ---

#[test]
fn step_visits_newest_first() {
    let mut store = ParticleStore::new(None);
    for x in [1.0, 2.0, 3.0] {
        store.push(particle_at(x));
    }
    let mut seen = Vec::new();
    store.step(0.1, |p| seen.push(p.position().x));
    assert_eq!(seen, vec![3.0, 2.0, 1.0]);
}

#[test]
fn step_visits_with_life_before_decay() {
    let mut store = ParticleStore::new(None);
    store.push(particle_at(1.0));
    let mut lives = Vec::new();
    store.step(0.25, |p| lives.push(p.life()));
    store.step(0.25, |p| lives.push(p.life()));
    assert_eq!(lives, vec![1.0, 0.75]);
}

#[test]
fn step_removes_only_the_expired_middle_particle() {
    let mut store = ParticleStore::new(None);
    for x in [1.0, 2.0, 3.0] {
        store.push(particle_at(x));
    }
    // B is one frame from the end of its 50-frame life.
    store.particles[1].age = 49;
    let removed = store.step(0.02, |_| {});
    assert_eq!(removed, 1);
    assert_eq!(xs(&store), vec![1.0, 3.0]);
}

#[test]
fn step_does_not_move_particles() {
    let mut store = ParticleStore::new(None);
    store.push(Particle::new(Point::new(5.0, 6.0), Hsla::trail(0.0), 4.0));
    store.step(0.1, |_| {});
    assert_eq!(store.iter().next().map(Particle::position), Some(Point::new(5.0, 6.0)));
}

#[test]
fn particle_expires_after_ceil_one_over_decay_steps() {
    for (decay, expected) in [(0.02, 50), (0.025, 40), (0.03, 34), (0.04, 25), (0.05, 20), (0.1, 10), (1.0, 1)] {
        let mut store = ParticleStore::new(None);
        store.push(particle_at(0.0));
        let mut frames = 0;
        while !store.is_empty() {
            store.step(decay, |_| {});
            frames += 1;
            assert!(frames <= expected, "decay {decay}: still alive after {frames} frames");
        }
        assert_eq!(frames, expected, "decay {decay}");
    }
}

#[test]
fn decay_just_below_a_unit_fraction_lives_the_extra_frame() {
    // 1 / decay is a hair above 2, so the particle needs a third frame.
    let decay = (1.0 - 5e-10) / 2.0;
    let mut store = ParticleStore::new(None);
    store.push(particle_at(0.0));
    assert_eq!(store.step(decay, |_| {}), 0);
    assert_eq!(store.step(decay, |_| {}), 0);
    assert!(store.iter().next().unwrap().life() > 0.0);
    assert_eq!(store.step(decay, |_| {}), 1);
    assert!(store.is_empty());
}

#[test]
fn life_tracks_age_without_drift() {
    let mut store = ParticleStore::new(None);
    store.push(particle_at(0.0));
    for _ in 0..30 {
        store.step(0.02, |_| {});
    }
    let p = store.iter().next().unwrap();
    assert_eq!(p.age(), 30);
    assert_eq!(p.life(), 1.0 - 30.0 * 0.02);
}
