use glam::Vec2;

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form accepted by canvas fill styles and gradient stops.
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn css_alpha(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Solid fill with a global alpha applied to the whole shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    pub alpha: f32,
}

impl Fill {
    pub fn new(color: Rgb, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

/// One cubic bezier segment continuing from the previous end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// 2D drawing surface the particle layers render through.
///
/// The browser front-end implements this on `CanvasRenderingContext2d`;
/// tests implement it by recording calls. Every call is self-contained: no
/// fill or alpha state leaks from one call into the next.
pub trait Painter {
    /// Erase the whole surface to transparent.
    fn clear(&mut self, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, fill: Fill);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, fill: Fill);
    /// Closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Vec2], fill: Fill);
    /// Closed path made of cubic segments starting at `start`.
    fn fill_bezier(&mut self, start: Vec2, segments: &[CubicSegment], fill: Fill);
    /// Square of side `2 * radius` filled with a radial gradient from `color`
    /// at the center to transparent at `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
}
