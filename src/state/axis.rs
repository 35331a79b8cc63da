use yew::Callback;

use crate::model::{Axis, AxisOutcome};

/// Running state for one axis of the active gesture.
#[derive(Debug, Clone)]
pub struct AxisTracker {
    axis: Axis,
    sensitivity: f64,
    delta: f64,
    handler: Option<Callback<AxisOutcome>>,
}

impl AxisTracker {
    pub fn new(axis: Axis, sensitivity: f64, handler: Option<Callback<AxisOutcome>>) -> Self {
        Self {
            axis,
            sensitivity,
            delta: 0.0,
            handler,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn has_callback(&self) -> bool {
        self.handler.is_some()
    }

    pub fn record_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    pub fn clear(&mut self) {
        self.delta = 0.0;
    }

    pub fn crosses_threshold(&self) -> bool {
        self.delta.abs() >= self.sensitivity
    }

    pub fn resolve_move(&self) {
        if let Some(cb) = &self.handler {
            cb.emit(AxisOutcome::Move(self.delta));
        }
    }

    /// Settles the axis: the current delta when `committed`, otherwise back to zero.
    pub fn resolve_end(&self, committed: bool) {
        if let Some(cb) = &self.handler {
            cb.emit(AxisOutcome::End(if committed { self.delta } else { 0.0 }));
        }
    }
}
