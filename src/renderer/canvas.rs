//! HTML canvas 2D backend (wasm32 only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Font, Surface, TextAnchor};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    pub size: (u32, u32),
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            size: (canvas.width(), canvas.height()),
        })
    }
}

impl Surface for CanvasSurface {
    fn fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(0.0, 0.0, self.size.0 as f64, self.size.1 as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let c = rect.center();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.ellipse(
            c.x as f64,
            c.y as f64,
            rect.width as f64 / 2.0,
            rect.height as f64 / 2.0,
            0.0,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Ellipse draw failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, anchor: TextAnchor) {
        self.ctx.set_font(&font.to_css());
        self.ctx.set_fill_style_str(&color.to_css());
        let (pos, align, baseline) = match anchor {
            TextAnchor::TopLeft(p) => (p, "left", "top"),
            TextAnchor::Center(p) => (p, "center", "middle"),
        };
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline(baseline);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Text draw failed: {:?}", e);
        }
    }

    fn present(&mut self) {
        // The browser composites the canvas after the animation frame callback
    }
}
