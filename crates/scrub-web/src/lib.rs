#![cfg(target_arch = "wasm32")]
use scrub_core::{ScrubController, ScrubParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod media;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrub-web starting");
    Ok(())
}

/// Handle to a mounted scrubber.
///
/// Shutting down cancels the frame loop and detaches the input listeners;
/// that is the sole teardown path. A handle dropped without `shutdown`
/// leaves the loop running for the page lifetime.
#[wasm_bindgen]
pub struct Scrubber {
    frame_loop: frame::FrameLoop,
    input: Option<events::InputHandles>,
}

#[wasm_bindgen]
impl Scrubber {
    pub fn shutdown(&mut self) {
        self.frame_loop.cancel();
        if let Some(input) = self.input.take() {
            input.detach();
        }
        log::info!("scrubber shut down");
    }
}

/// Mount the scrubber on the `<video>` element with the given id.
///
/// The video's `loop`/`muted` flags and its source stay in the markup; this
/// only drives the playback cursor.
#[wasm_bindgen]
pub fn mount(video_id: &str) -> Result<Scrubber, JsValue> {
    match init(video_id) {
        Ok(s) => Ok(s),
        Err(e) => {
            log::error!("mount error: {e:?}");
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

fn init(video_id: &str) -> anyhow::Result<Scrubber> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let video = dom::video_element(&document, video_id)?;

    let controller = Rc::new(RefCell::new(ScrubController::new(ScrubParams::default())));

    let input = events::wire_input_handlers(events::InputWiring {
        target: web::EventTarget::from(document),
        controller: controller.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        video,
        last_instant: None,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    log::info!("scrubber mounted on #{video_id}");
    Ok(Scrubber {
        frame_loop,
        input: Some(input),
    })
}
