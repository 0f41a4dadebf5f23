//! Browser client for the Pong game
//!
//! Draws on a 2D canvas, shows the score in a page element, drives the
//! simulation from `requestAnimationFrame` and reads W/S (or arrow) keys.
//! Note: only meaningful when compiling for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;
mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::{CanvasSurface, ScoreElement};
use game_core::{Config, DrawSurface, FrameToken, Game, GameLoop, InputState};
use scheduler::RafScheduler;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Everything a frame callback needs, shared behind one `RefCell`
pub(crate) struct App {
    game_loop: GameLoop<RafScheduler>,
    surface: CanvasSurface,
    scores: ScoreElement,
    input: InputState,
}

impl App {
    fn on_frame(app: &Rc<RefCell<App>>, token: FrameToken, now_ms: f64) {
        let Ok(mut app) = app.try_borrow_mut() else {
            log::warn!("Frame fired while the client was busy, skipping");
            return;
        };
        let App {
            game_loop,
            surface,
            scores,
            input,
        } = &mut *app;
        game_loop.on_frame(token, now_ms, input, surface, scores);
    }
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {err}").into());
    }
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Page-facing handle: wire `start`/`stop` to buttons
#[wasm_bindgen]
pub struct PongClient {
    window: Window,
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl PongClient {
    /// Bind to `#canvas_id` and `#score_id`; `config_json` may override tuning
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        score_id: &str,
        config_json: Option<String>,
    ) -> Result<PongClient, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let config = match config_json {
            Some(json) => {
                Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => Config::default(),
        };

        let surface = CanvasSurface::from_id(&document, canvas_id)?;
        let scores = ScoreElement::from_id(&document, score_id)?;
        let map = surface.size();
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let game = Game::new(config, seed, &map);

        let app = Rc::new_cyclic(|weak| {
            RefCell::new(App {
                game_loop: GameLoop::new(game, RafScheduler::new(window.clone(), weak.clone())),
                surface,
                scores,
                input: InputState::new(),
            })
        });
        input::attach_keyboard(&window, Rc::downgrade(&app))?;

        log::info!("Pong client ready on {}x{} canvas", map.width, map.height);
        Ok(Self { window, app })
    }

    /// Start a fresh match, restarting cleanly if one is running
    pub fn start(&self) {
        let now = now_ms(&self.window);
        let mut app = self.app.borrow_mut();
        let App {
            game_loop,
            surface,
            scores,
            ..
        } = &mut *app;
        game_loop.start(now, &*surface, scores);
    }

    pub fn stop(&self) {
        self.app.borrow_mut().game_loop.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.app.borrow().game_loop.game.is_running()
    }

    /// Current score as "human : computer"
    pub fn score(&self) -> String {
        self.app.borrow().game_loop.game.score.to_string()
    }

    /// Feed a key press from the page; returns whether the key is mapped
    pub fn key_down(&self, key: &str) -> bool {
        self.app.borrow_mut().input.key_down(key)
    }

    pub fn key_up(&self, key: &str) -> bool {
        self.app.borrow_mut().input.key_up(key)
    }
}
