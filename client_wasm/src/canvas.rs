//! Canvas 2D drawing surface and the score readout element

use game_core::{Aabb, DrawSurface, GameMap, Score, ScoreDisplay};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

const FILL_COLOR: &str = "white";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("Canvas #{id} not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{id} is not a canvas")))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> GameMap {
        // Keep the backing store in step with the laid-out size; a hidden
        // canvas (zero layout size) keeps its last known dimensions
        let width = self.canvas.offset_width();
        let height = self.canvas.offset_height();
        if width > 0 && height > 0 {
            if self.canvas.width() != width as u32 {
                self.canvas.set_width(width as u32);
            }
            if self.canvas.height() != height as u32 {
                self.canvas.set_height(height as u32);
            }
        }
        GameMap::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        // Resizing the canvas resets context state, so set the fill every frame
        self.ctx.set_fill_style_str(FILL_COLOR);
    }

    fn fill_rect(&mut self, rect: Aabb) {
        let size = rect.size();
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }
}

pub struct ScoreElement {
    element: HtmlElement,
}

impl ScoreElement {
    pub fn from_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("Score element #{id} not found")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))?;
        Ok(Self { element })
    }
}

impl ScoreDisplay for ScoreElement {
    fn show_score(&mut self, score: &Score) {
        self.element.set_inner_text(&score.to_string());
    }
}
