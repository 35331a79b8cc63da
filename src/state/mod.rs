pub mod axis;
pub mod gesture;
pub mod transition;

pub use axis::AxisTracker;
pub use gesture::{GestureController, GestureState, Handlers, Phase};
pub use transition::{MemoryTransitions, TransitionCache};
