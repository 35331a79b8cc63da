//! JavaScript entry point taking the same option object as the jQuery plugin:
//!
//! ```js
//! const handle = touchMotionController(listener, {
//!     elementX: panel,
//!     callbackX: (delta) => ({ move() { /* follow */ }, end() { /* settle */ } }),
//!     clickHandler: ({ clientX, clientY }) => {},
//!     sensitivity: 60,
//!     priorityAxis: "x",
//! });
//! handle.detach();
//! ```

use js_sys::{Array, Function, Object, Reflect};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::Callback;

use super::{DomTransitions, TouchBinding};
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::model::{Axis, AxisOutcome, Point};
use crate::state::{GestureController, Handlers};

const CONFIG_KEYS: [&str; 4] = ["sensitivityX", "sensitivityY", "sensitivity", "priorityAxis"];

#[wasm_bindgen]
pub struct TouchMotionHandle {
    binding: Option<TouchBinding<DomTransitions>>,
}

#[wasm_bindgen]
impl TouchMotionHandle {
    /// Removes the touch listeners. Further calls do nothing.
    pub fn detach(&mut self) {
        self.binding.take();
    }

    #[wasm_bindgen(getter, js_name = isTracking)]
    pub fn is_tracking(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(TouchBinding::is_tracking)
    }
}

#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(verbose: bool) {
    crate::util::init_logging(if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    });
}

#[wasm_bindgen(js_name = touchMotionController)]
pub fn touch_motion_controller(listener: HtmlElement, options: JsValue) -> Result<TouchMotionHandle, JsValue> {
    let config = read_config(&options)?;
    let (x_elements, x) = read_axis(&options, Axis::X)?;
    let (y_elements, y) = read_axis(&options, Axis::Y)?;
    let click = get(&options, "clickHandler")
        .dyn_into::<Function>()
        .ok()
        .map(click_callback);
    let handlers = Handlers { x, y, click };
    let controller = GestureController::new(&config, handlers, DomTransitions::new(x_elements, y_elements))?;
    let binding = TouchBinding::attach(&listener, controller)?;
    Ok(TouchMotionHandle {
        binding: Some(binding),
    })
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

// Only the plain-data options go through serde; elements and functions are read directly.
fn read_config(options: &JsValue) -> Result<ControllerConfig, ControllerError> {
    config_from_options(CONFIG_KEYS.into_iter().map(|key| {
        let v = get(options, key);
        (key, v.as_f64(), v.as_string())
    }))
}

fn config_from_options<'a>(
    entries: impl IntoIterator<Item = (&'a str, Option<f64>, Option<String>)>,
) -> Result<ControllerConfig, ControllerError> {
    let mut map = Map::new();
    for (key, number, text) in entries {
        if let Some(v) = option_value(number, text) {
            map.insert(key.to_string(), v);
        }
    }
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Empty strings count as unset and numeric strings as numbers, as the plugin's
/// `||` fallbacks and JS coercion treated them.
fn option_value(number: Option<f64>, text: Option<String>) -> Option<Value> {
    if let Some(n) = number {
        return serde_json::Number::from_f64(n).map(Value::Number);
    }
    let text = text?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(n) => serde_json::Number::from_f64(n).map(Value::Number),
        Err(_) => Some(Value::String(text.to_string())),
    }
}

type AxisOptions = (Vec<HtmlElement>, Option<Callback<AxisOutcome>>);

fn read_axis(options: &JsValue, axis: Axis) -> Result<AxisOptions, ControllerError> {
    let suffix = match axis {
        Axis::X => "X",
        Axis::Y => "Y",
    };
    let elements = read_elements(&get(options, &format!("element{suffix}")), axis)?;
    let callback = get(options, &format!("callback{suffix}")).dyn_into::<Function>().ok();
    let callback = if axis_enabled(axis, !elements.is_empty(), callback.is_some())? {
        callback.map(axis_callback)
    } else {
        None
    };
    Ok((elements, callback))
}

/// An axis moves only with both an element and a callback; an element alone is a mistake.
fn axis_enabled(axis: Axis, has_elements: bool, has_callback: bool) -> Result<bool, ControllerError> {
    match (has_elements, has_callback) {
        (true, false) => Err(ControllerError::MissingCallback(axis)),
        (false, true) => {
            log::debug!("callback{:?} without element{:?}, axis disabled", axis, axis);
            Ok(false)
        }
        (has_elements, _) => Ok(has_elements),
    }
}

fn read_elements(value: &JsValue, axis: Axis) -> Result<Vec<HtmlElement>, ControllerError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }
    let not_an_element = || ControllerError::Dom(format!("element{:?} is not an HTMLElement", axis));
    if Array::is_array(value) {
        return Array::from(value)
            .iter()
            .map(|v| v.dyn_into::<HtmlElement>().map_err(|_| not_an_element()))
            .collect();
    }
    value
        .clone()
        .dyn_into::<HtmlElement>()
        .map(|el| vec![el])
        .map_err(|_| not_an_element())
}

/// Bridges the plugin's `callback(delta) -> { move(), end() }` contract.
fn axis_callback(f: Function) -> Callback<AxisOutcome> {
    Callback::from(move |outcome: AxisOutcome| {
        let result = match f.call1(&JsValue::NULL, &JsValue::from_f64(outcome.delta())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("axis callback threw: {:?}", e);
                return;
            }
        };
        let method = if outcome.is_end() { "end" } else { "move" };
        match get(&result, method).dyn_into::<Function>() {
            Ok(m) => {
                if let Err(e) = m.call0(&result) {
                    log::error!("{}() threw: {:?}", method, e);
                }
            }
            Err(_) => log::error!("axis callback result has no {}()", method),
        }
    })
}

fn click_callback(f: Function) -> Callback<Point> {
    Callback::from(move |p: Point| {
        let arg = Object::new();
        let _ = Reflect::set(&arg, &"clientX".into(), &JsValue::from_f64(p.x));
        let _ = Reflect::set(&arg, &"clientY".into(), &JsValue::from_f64(p.y));
        if let Err(e) = f.call1(&JsValue::NULL, &arg) {
            log::error!("clickHandler threw: {:?}", e);
        }
    })
}
