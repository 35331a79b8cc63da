//! Single-finger swipe tracking for drag-following elements.
//!
//! A [`GestureController`] turns touch start/move/end/cancel events into per-axis
//! displacements. While the finger is down each axis handler receives
//! [`AxisOutcome::Move`]; on release it receives [`AxisOutcome::End`] with either the
//! final displacement (past the axis sensitivity) or zero (snap back). A touch that
//! never moved is reported to the click handler instead.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod util;
pub mod web;

pub use config::ControllerConfig;
pub use error::ControllerError;
pub use model::{Axis, AxisOutcome, GestureOutcome, Point, PriorityAxis, TouchInput, TouchPhase};
pub use state::{GestureController, Handlers, MemoryTransitions, TransitionCache};
pub use web::{DomTransitions, TouchBinding};
