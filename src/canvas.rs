use anyhow::anyhow;
use glam::Vec2;
use std::f64::consts::TAU;
use story_core::{CubicSegment, Fill, Painter, Rgb};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` over a canvas 2D context. Each call is wrapped in save/restore
/// so alpha and fill style never leak between shapes.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Fails when the canvas has no 2D context (unsupported, or the canvas
    /// already holds a different context type).
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext('2d'): {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("2d context has unexpected type"))?;
        Ok(Self { ctx })
    }

    #[inline]
    fn begin(&self, fill: Fill) {
        self.ctx.save();
        self.ctx.set_global_alpha(fill.alpha as f64);
        self.ctx.set_fill_style_str(&fill.color.css());
    }

    #[inline]
    fn end(&self) {
        self.ctx.restore();
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, fill: Fill) {
        self.begin(fill);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        self.end();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, fill: Fill) {
        self.begin(fill);
        self.ctx.begin_path();
        let drawn = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            rotation as f64,
            0.0,
            TAU,
        );
        if drawn.is_ok() {
            self.ctx.fill();
        }
        self.end();
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: Fill) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.begin(fill);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.end();
    }

    fn fill_bezier(&mut self, start: Vec2, segments: &[CubicSegment], fill: Fill) {
        self.begin(fill);
        self.ctx.begin_path();
        self.ctx.move_to(start.x as f64, start.y as f64);
        for s in segments {
            self.ctx.bezier_curve_to(
                s.c1.x as f64,
                s.c1.y as f64,
                s.c2.x as f64,
                s.c2.y as f64,
                s.end.x as f64,
                s.end.y as f64,
            );
        }
        self.ctx.fill();
        self.end();
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &color.css());
        _ = gradient.add_color_stop(1.0, &color.css_alpha(0.0));
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x - r, y - r, 2.0 * r, 2.0 * r);
        self.ctx.restore();
    }
}
