//! Browser glue: element transitions, touch event binding, and the JS entry point.

pub mod binding;
pub mod js;
pub mod transition;

pub use binding::TouchBinding;
pub use transition::DomTransitions;
