//! Core data types shared by the gesture controller, the DOM binding and the demo app.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Which axis wins when a move has motion on both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityAxis {
    #[default]
    None,
    X,
    Y,
}

impl PriorityAxis {
    /// Fixed (priority, secondary) pair, or `None` when both axes move freely.
    pub fn ranking(self) -> Option<(Axis, Axis)> {
        match self {
            PriorityAxis::None => None,
            PriorityAxis::X => Some((Axis::X, Axis::Y)),
            PriorityAxis::Y => Some((Axis::Y, Axis::X)),
        }
    }
}

/// A position in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// What an axis handler is told to do with a displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisOutcome {
    /// The finger is still down; follow it.
    Move(f64),
    /// The gesture is over (or the axis lost priority); settle at this displacement.
    /// `End(0.0)` means revert to the origin.
    End(f64),
}

impl AxisOutcome {
    pub fn delta(&self) -> f64 {
        match *self {
            AxisOutcome::Move(d) | AxisOutcome::End(d) => d,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, AxisOutcome::End(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchPhase {
    pub const EVENT_TYPES: [&'static str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

    /// Maps a DOM event type name onto a phase.
    pub fn from_event_type(name: &str) -> Option<TouchPhase> {
        match name {
            "touchstart" => Some(TouchPhase::Start),
            "touchmove" => Some(TouchPhase::Move),
            "touchend" => Some(TouchPhase::End),
            "touchcancel" => Some(TouchPhase::Cancel),
            _ => None,
        }
    }
}

/// One touch lifecycle event reduced to what the controller needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput {
    pub phase: TouchPhase,
    /// First changed touch point; absent when the event carried none.
    pub point: Option<Point>,
}

impl TouchInput {
    pub fn new(phase: TouchPhase, point: Option<Point>) -> Self {
        Self { phase, point }
    }
}

/// What the controller did with an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    Started(Point),
    Moved { dx: f64, dy: f64 },
    /// Out-of-sequence or pointless event; nothing dispatched.
    Ignored,
    Tapped(Point),
    Released,
}
