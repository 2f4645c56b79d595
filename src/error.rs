//! Error type shared by the engine, the renderer and the mount handle.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while configuring or driving the trail.
///
/// An unsupported environment (no window, no 2D context) is not an error: the
/// mount entry points report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TrailError {
    #[error("invalid trail config: {0}")]
    InvalidConfig(String),
    #[error("unknown trail preset: {0:?}")]
    UnknownPreset(String),
    #[error("trail config parse: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for TrailError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<TrailError> for JsValue {
    fn from(error: TrailError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
