use std::collections::HashSet;

use crate::model::Axis;

/// Saves and restores the transition duration of the element that follows an axis,
/// so dragged motion tracks the finger 1:1 and release animates.
pub trait TransitionCache {
    /// First call per gesture stores the current duration and zeroes it.
    fn capture(&mut self, axis: Axis);
    /// Restores the stored duration and forgets it. No-op if nothing is stored.
    fn release(&mut self, axis: Axis);
    fn is_captured(&self, axis: Axis) -> bool;
}

/// Cache for hosts without styled elements; it only remembers which axes are engaged.
#[derive(Debug, Default, Clone)]
pub struct MemoryTransitions {
    engaged: HashSet<Axis>,
}

impl MemoryTransitions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionCache for MemoryTransitions {
    fn capture(&mut self, axis: Axis) {
        self.engaged.insert(axis);
    }

    fn release(&mut self, axis: Axis) {
        self.engaged.remove(&axis);
    }

    fn is_captured(&self, axis: Axis) -> bool {
        self.engaged.contains(&axis)
    }
}
