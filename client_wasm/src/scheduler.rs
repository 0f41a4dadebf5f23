//! requestAnimationFrame-backed frame scheduling

use std::cell::RefCell;
use std::rc::Weak;

use game_core::{FrameScheduler, FrameToken};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::App;

pub(crate) struct RafScheduler {
    window: Window,
    app: Weak<RefCell<App>>,
}

impl RafScheduler {
    pub(crate) fn new(window: Window, app: Weak<RefCell<App>>) -> Self {
        Self { window, app }
    }
}

impl FrameScheduler for RafScheduler {
    /// `None` when the browser refused the request
    type Handle = Option<i32>;

    fn request_frame(&mut self, token: FrameToken) -> Option<i32> {
        let app = self.app.clone();
        let callback = Closure::once_into_js(move |now: f64| {
            if let Some(app) = app.upgrade() {
                App::on_frame(&app, token, now);
            }
        });

        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: Option<i32>) {
        if let Some(id) = handle {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame({}) failed: {:?}", id, err);
            }
        }
    }
}
