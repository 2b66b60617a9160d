//! Self-rescheduling requestAnimationFrame loop.

use crate::media;
use instant::Instant;
use scrub_core::{ScrubController, MS_PER_SEC};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<ScrubController>>,
    pub video: web::HtmlVideoElement,
    pub last_instant: Option<Instant>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // The first frame only records the timestamp.
        let Some(prev) = self.last_instant.replace(now) else {
            return;
        };
        let dt_ms = (now - prev).as_secs_f64() * MS_PER_SEC;

        let duration = media::known_duration(&self.video);
        if let Some(position) = self.controller.borrow_mut().tick(dt_ms, duration) {
            media::apply_position(&self.video, position);
        }
    }
}

/// Cancellation handle for the frame loop.
///
/// The loop checks the flag at the top of every frame, so after `cancel` it
/// neither runs the consumer nor reschedules itself.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    FrameLoop { running }
}
