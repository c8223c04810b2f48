use rand::RngCore;

use crate::coords::Vec2;
use crate::geom;
use crate::scene::{Shape, ShapeKind, ShapeOptions};
use crate::surface::Surface;

impl Shape {
    /// Circle centered at (`x`, `y`).
    pub fn circle(
        x: f64,
        y: f64,
        radius: f64,
        color: u32,
        options: ShapeOptions,
        rng: &mut dyn RngCore,
    ) -> Shape {
        Shape::new(ShapeKind::Circle { radius }, Vec2::new(x, y), color, options, rng)
    }
}

/// Fills the circle interior: every surface pixel whose integer position
/// satisfies the containment test. The scan is clamped to the surface, so
/// mostly-offscreen circles stay cheap.
pub(crate) fn fill(surface: &mut dyn Surface, center: Vec2, radius: f64, color: u32) {
    if radius <= 0.0 {
        return;
    }
    let x0 = ((center.x - radius).floor() as i64).max(0);
    let y0 = ((center.y - radius).floor() as i64).max(0);
    let x1 = ((center.x + radius).ceil() as i64).min(surface.width() as i64 - 1);
    let y1 = ((center.y + radius).ceil() as i64).min(surface.height() as i64 - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }
    let (x0, x1, y0, y1) = (x0 as i32, x1 as i32, y0 as i32, y1 as i32);

    for y in y0..=y1 {
        for x in x0..=x1 {
            if geom::point_in_circle(Vec2::new(x as f64, y as f64), center, radius) {
                surface.fill_pixel(x, y, color);
            }
        }
    }
}
