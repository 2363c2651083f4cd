//! Procedural outlines for the ambient particle kinds.

use crate::constants::{PETAL_ASPECT, STAR_INNER_RATIO, STAR_POINTS};
use crate::paint::CubicSegment;
use glam::Vec2;
use std::f32::consts::PI;

/// Ellipse radii for a petal of the given size.
#[inline]
pub fn petal_radii(size: f32) -> Vec2 {
    Vec2::new(size * PETAL_ASPECT, size)
}

/// Vertices of a five-point star, alternating outer and inner radius,
/// starting with the point straight above `center`.
pub fn star_points(center: Vec2, size: f32) -> [Vec2; STAR_POINTS * 2] {
    let outer = size;
    let inner = size * STAR_INNER_RATIO;
    let mut points = [Vec2::ZERO; STAR_POINTS * 2];
    for (i, p) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = (i as f32 * PI) / STAR_POINTS as f32 - PI / 2.0;
        *p = center + Vec2::new(angle.cos(), angle.sin()) * radius;
    }
    points
}

/// Closed heart outline: bottom tip, left lobe, center dip, right lobe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPath {
    pub start: Vec2,
    pub segments: [CubicSegment; 4],
}

pub fn heart(center: Vec2, size: f32) -> HeartPath {
    let s = size;
    let at = |dx: f32, dy: f32| center + Vec2::new(dx * s, dy * s);
    let seg = |c1: Vec2, c2: Vec2, end: Vec2| CubicSegment { c1, c2, end };
    HeartPath {
        start: at(0.0, 1.0),
        segments: [
            seg(at(-2.0, 0.5), at(-2.5, -0.5), at(-1.25, -1.25)),
            seg(at(-0.5, -2.0), at(0.5, -2.0), at(0.0, -0.75)),
            seg(at(-0.5, -2.0), at(0.5, -2.0), at(1.25, -1.25)),
            seg(at(2.5, -0.5), at(2.0, 0.5), at(0.0, 1.0)),
        ],
    }
}
