use thiserror::Error;

use crate::model::Axis;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("sensitivity for axis {axis:?} must be a positive number, got {value}")]
    InvalidSensitivity { axis: Axis, value: f64 },
    #[error("invalid controller options: {0}")]
    Config(#[from] serde_json::Error),
    #[error("an element was supplied for axis {0:?} without a callback")]
    MissingCallback(Axis),
    #[error("dom: {0}")]
    Dom(String),
}

impl From<ControllerError> for wasm_bindgen::JsValue {
    fn from(value: ControllerError) -> Self {
        wasm_bindgen::JsValue::from_str(&value.to_string())
    }
}
