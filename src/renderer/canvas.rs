//! Browser 2D canvas backend

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::Color;
use crate::consts::NET_DASH;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// `[on, off]` segments for `setLineDash`
    dash: Array,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        let dash = Array::of2(&JsValue::from_f64(NET_DASH[0] as f64), &JsValue::from_f64(NET_DASH[1] as f64));
        Self { ctx, dash }
    }
}

impl Surface for CanvasSurface {
    fn clear_area(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn draw_dashed_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        let _ = self.ctx.set_line_dash(&self.dash);
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
        // Solid again for anything stroked after us
        let _ = self.ctx.set_line_dash(&Array::new());
    }
}
