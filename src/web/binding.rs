use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, TouchEvent};

use crate::error::ControllerError;
use crate::model::{Point, TouchInput, TouchPhase};
use crate::state::{GestureController, Phase, TransitionCache};

/// Keeps a controller subscribed to the touch events of one surface.
/// Listeners are removed when the binding is dropped.
pub struct TouchBinding<T: TransitionCache + 'static> {
    target: EventTarget,
    controller: Rc<RefCell<GestureController<T>>>,
    listener: Closure<dyn FnMut(TouchEvent)>,
}

fn first_changed_point(e: &TouchEvent) -> Option<Point> {
    let t = e.changed_touches().item(0)?;
    Some(Point::new(t.client_x() as f64, t.client_y() as f64))
}

impl<T: TransitionCache + 'static> TouchBinding<T> {
    pub fn attach(target: &EventTarget, controller: GestureController<T>) -> Result<Self, ControllerError> {
        let controller = Rc::new(RefCell::new(controller));
        let listener = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(phase) = TouchPhase::from_event_type(&e.type_()) {
                    let input = TouchInput::new(phase, first_changed_point(&e));
                    // a handler that synchronously dispatches touch events would re-enter here
                    match controller.try_borrow_mut() {
                        Ok(mut c) => {
                            c.handle(input);
                        }
                        Err(_) => log::warn!("dropping re-entrant {:?}", phase),
                    }
                }
                // sole consumer of touch input on this surface
                e.prevent_default();
                e.stop_propagation();
            }) as Box<dyn FnMut(_)>)
        };
        let binding = Self {
            target: target.clone(),
            controller,
            listener,
        };
        for name in TouchPhase::EVENT_TYPES {
            binding
                .target
                .add_event_listener_with_callback(name, binding.listener.as_ref().unchecked_ref())
                .map_err(|e| ControllerError::Dom(format!("{name}: {e:?}")))?;
        }
        log::debug!("touch listeners attached");
        Ok(binding)
    }

    pub fn is_tracking(&self) -> bool {
        is_tracking(&self.controller)
    }
}

// Handlers run while the listener holds the controller; being mid-dispatch means mid-gesture.
fn is_tracking<T: TransitionCache>(controller: &RefCell<GestureController<T>>) -> bool {
    controller
        .try_borrow()
        .map_or(true, |c| c.state().phase == Phase::Tracking)
}

impl<T: TransitionCache + 'static> Drop for TouchBinding<T> {
    fn drop(&mut self) {
        for name in TouchPhase::EVENT_TYPES {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, self.listener.as_ref().unchecked_ref());
        }
        log::debug!("touch listeners detached");
    }
}
