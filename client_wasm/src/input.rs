//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::App;

/// Route window keydown/keyup events into the app's held-key state
pub(crate) fn attach_keyboard(window: &Window, app: Weak<RefCell<App>>) -> Result<(), JsValue> {
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let app = app.clone();
        let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let Some(app) = app.upgrade() else {
                return;
            };
            let Ok(mut app) = app.try_borrow_mut() else {
                return;
            };
            let key = event.key();
            let handled = if pressed {
                app.input.key_down(&key)
            } else {
                app.input.key_up(&key)
            };
            if handled {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        window.add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())?;
        // Listeners live for the page; the weak handle makes them inert once the client is dropped
        listener.forget();
    }
    Ok(())
}
