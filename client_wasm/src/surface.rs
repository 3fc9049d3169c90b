//! `Surface` implementation over a 2D canvas context

use game_core::render::Surface;
use game_core::Rgb;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Last color written to the canvas style, to skip redundant DOM writes
    background: Option<Rgb>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            canvas,
            ctx,
            background: None,
        })
    }
}

impl Surface for CanvasSurface {
    fn set_background(&mut self, color: Rgb) {
        if self.background == Some(color) {
            return;
        }
        match self
            .canvas
            .style()
            .set_property("background-color", &color.to_css())
        {
            Ok(()) => self.background = Some(color),
            Err(e) => console_error!("Failed to set background: {:?}", e),
        }
    }

    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(cx as f64, cy as f64, radius as f64, 0.0, TAU) {
            console_error!("Failed to draw ball: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: Rgb) {
        self.ctx.set_font(&format!("{}px Arial", size_px));
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            console_error!("Failed to draw text: {:?}", e);
        }
    }
}
