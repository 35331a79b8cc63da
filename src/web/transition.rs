use std::collections::HashMap;

use web_sys::HtmlElement;

use crate::model::Axis;
use crate::state::TransitionCache;

const PROPERTY: &str = "transition-duration";

/// Zeroes `transition-duration` on an axis's elements while a finger drags them and
/// puts the original value back on release.
pub struct DomTransitions {
    elements: [Vec<HtmlElement>; 2],
    saved: HashMap<Axis, String>,
}

impl DomTransitions {
    pub fn new(x: Vec<HtmlElement>, y: Vec<HtmlElement>) -> Self {
        Self {
            elements: [x, y],
            saved: HashMap::new(),
        }
    }
}

fn computed_duration(el: &HtmlElement) -> Option<String> {
    let style = web_sys::window()?.get_computed_style(el).ok()??;
    style.get_property_value(PROPERTY).ok()
}

impl TransitionCache for DomTransitions {
    fn capture(&mut self, axis: Axis) {
        if self.saved.contains_key(&axis) {
            return;
        }
        let els = &self.elements[axis.index()];
        // read from the first element, written to all of them; with no elements the axis
        // is still marked engaged so a live axis switch snaps it back
        let duration = els.first().and_then(computed_duration).unwrap_or_default();
        for el in els {
            el.style().set_property(PROPERTY, "0s").ok();
        }
        log::trace!("{:?} transition {} -> 0s", axis, duration);
        self.saved.insert(axis, duration);
    }

    fn release(&mut self, axis: Axis) {
        let Some(duration) = self.saved.remove(&axis) else {
            return;
        };
        for el in &self.elements[axis.index()] {
            el.style().set_property(PROPERTY, &duration).ok();
        }
    }

    fn is_captured(&self, axis: Axis) -> bool {
        self.saved.contains_key(&axis)
    }
}
