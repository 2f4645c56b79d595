//! Reusable UI component modules.

pub mod cursor_trail;
