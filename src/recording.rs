//! In-memory [`Surface`] that records every paint, for tests.

use crate::error::TrailError;
use crate::render::{Composite, Glow, Surface};

/// A single recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Composite(Composite),
    Fade { alpha: f64, width: u32, height: u32 },
    Glow(Glow),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
    /// When set, every `fill_glow` fails with this message.
    pub fail_glow: Option<String>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn glows(&self) -> Vec<Glow> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Glow(glow) => Some(*glow),
                _ => None,
            })
            .collect()
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn set_composite(&mut self, mode: Composite) -> Result<(), TrailError> {
        self.calls.push(DrawCall::Composite(mode));
        Ok(())
    }

    fn fade(&mut self, alpha: f64) -> Result<(), TrailError> {
        self.calls.push(DrawCall::Fade { alpha, width: self.width, height: self.height });
        Ok(())
    }

    fn fill_glow(&mut self, glow: &Glow) -> Result<(), TrailError> {
        if let Some(message) = &self.fail_glow {
            return Err(TrailError::Js(message.clone()));
        }
        self.calls.push(DrawCall::Glow(*glow));
        Ok(())
    }
}
