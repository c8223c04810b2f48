use rand::RngCore;

use crate::coords::Vec2;
use crate::scene::{Shape, ShapeKind, ShapeOptions};
use crate::surface::Surface;

impl Shape {
    /// Axis-aligned rectangle centered at (`x`, `y`).
    pub fn rect(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: u32,
        options: ShapeOptions,
        rng: &mut dyn RngCore,
    ) -> Shape {
        Shape::new(ShapeKind::Rect { width, height }, Vec2::new(x, y), color, options, rng)
    }
}

/// Fills the rectangle interior with one clipped surface fill.
pub(crate) fn fill(surface: &mut dyn Surface, center: Vec2, width: f64, height: f64, color: u32) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    surface.fill_rect(
        (center.x - width / 2.0) as i32,
        (center.y - height / 2.0) as i32,
        width as u32,
        height as u32,
        color,
    );
}
