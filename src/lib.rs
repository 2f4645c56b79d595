//! Decorative cursor trail for the festive wishes pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Pointer
//! movement spawns short-lived glowing particles; a frame loop washes the
//! overlay with translucent black, paints each particle as an additive radial
//! glow, ages it, and drops it once its life runs out. The effect is purely
//! visual: it never intercepts input and never reports anything back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`particle`] | Particle model and the capped live-particle store |
//! | [`color`] | Structured HSLA colors and color schemes |
//! | [`config`] | Trail tuning and named presets |
//! | [`render`] | Drawing-surface trait and the 2D-canvas backend |
//! | [`frame_loop`] | `requestAnimationFrame` task handle |
//! | [`listener`] | Scoped DOM event subscriptions |
//! | [`mount`] | Mount/unmount handle wiring the pieces together |
//! | [`overlay`] | Full-viewport, input-transparent overlay canvas |
//! | [`web`] | `wasm_bindgen` entry points for plain JavaScript hosts |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Crate error type |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod listener;
pub mod mount;
pub mod overlay;
pub mod particle;
pub mod render;
pub mod web;

#[cfg(test)]
mod recording;

pub use config::{TrailConfig, TrailPreset};
pub use error::TrailError;
pub use mount::TrailHandle;
