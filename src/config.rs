//! Construction-time options. Everything here is plain data so it can come from
//! JSON, from a JS options object, or from persisted demo settings.

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;
use crate::model::{Axis, PriorityAxis};

pub const DEFAULT_SENSITIVITY: f64 = 75.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerConfig {
    pub sensitivity_x: Option<f64>,
    pub sensitivity_y: Option<f64>,
    /// Shared fallback for whichever axis has no threshold of its own.
    pub sensitivity: Option<f64>,
    pub priority_axis: PriorityAxis,
}

impl ControllerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_sensitivity(mut self, px: f64) -> Self {
        self.sensitivity = Some(px);
        self
    }

    pub fn with_axis_sensitivity(mut self, axis: Axis, px: f64) -> Self {
        match axis {
            Axis::X => self.sensitivity_x = Some(px),
            Axis::Y => self.sensitivity_y = Some(px),
        }
        self
    }

    pub fn with_priority(mut self, priority: PriorityAxis) -> Self {
        self.priority_axis = priority;
        self
    }

    /// Per-axis value, then the shared value, then the default. Zero counts as unset.
    pub fn sensitivity_for(&self, axis: Axis) -> Result<f64, ControllerError> {
        let own = match axis {
            Axis::X => self.sensitivity_x,
            Axis::Y => self.sensitivity_y,
        };
        let picked = [own, self.sensitivity]
            .into_iter()
            .flatten()
            .find(|v| *v != 0.0)
            .unwrap_or(DEFAULT_SENSITIVITY);
        if !picked.is_finite() || picked < 0.0 {
            return Err(ControllerError::InvalidSensitivity { axis, value: picked });
        }
        Ok(picked)
    }
}
