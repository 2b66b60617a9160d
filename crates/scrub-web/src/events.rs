//! Wheel and click wiring between the DOM and the scrub controller.

use scrub_core::ScrubController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub target: web::EventTarget,
    pub controller: Rc<RefCell<ScrubController>>,
}

/// Owns the listener closures so they can be removed again.
pub struct InputHandles {
    target: web::EventTarget,
    wheel: Closure<dyn FnMut(web::WheelEvent)>,
    click: Closure<dyn FnMut(web::MouseEvent)>,
}

/// Attach the wheel and click listeners.
///
/// Wheel deltas retarget the scroll conditioner between ticks; a click
/// toggles the press state. Both are O(1) overwrites, so no event is queued.
pub fn wire_input_handlers(w: InputWiring) -> InputHandles {
    let controller = w.controller.clone();
    let wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        controller.borrow_mut().on_scroll(ev.delta_y());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .target
        .add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());

    let controller = w.controller.clone();
    let click = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        controller.borrow_mut().toggle_pressed();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .target
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref());

    InputHandles {
        target: w.target,
        wheel,
        click,
    }
}

impl InputHandles {
    /// Remove both listeners. Already-smoothed values keep decaying toward
    /// their last targets; only future retargeting stops.
    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        _ = self
            .target
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
    }
}
