use rand::RngCore;

use crate::coords::Vec2;
use crate::geom;
use crate::scene::{Shape, ShapeKind, ShapeOptions};
use crate::surface::Surface;

impl Shape {
    /// Triangle with vertices `a`, `b`, `c`. The shape position is the
    /// centroid and tracks the vertices whenever they move.
    pub fn triangle(
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: u32,
        options: ShapeOptions,
        rng: &mut dyn RngCore,
    ) -> Shape {
        Shape::new(ShapeKind::Triangle { a, b, c }, centroid(a, b, c), color, options, rng)
    }

    /// The three vertices, or `None` for other shape kinds.
    pub fn vertices(&self) -> Option<(Vec2, Vec2, Vec2)> {
        match *self.kind() {
            ShapeKind::Triangle { a, b, c } => Some((a, b, c)),
            _ => None,
        }
    }
}

pub(crate) fn centroid(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    Vec2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Fills the triangle interior: bounding-box scan with the barycentric test,
/// clamped to the surface. Degenerate triangles contain nothing and paint
/// nothing.
pub(crate) fn fill(surface: &mut dyn Surface, a: Vec2, b: Vec2, c: Vec2, color: u32) {
    let x0 = ((a.x.min(b.x).min(c.x)).floor() as i64).max(0);
    let y0 = ((a.y.min(b.y).min(c.y)).floor() as i64).max(0);
    let x1 = ((a.x.max(b.x).max(c.x)).ceil() as i64).min(surface.width() as i64 - 1);
    let y1 = ((a.y.max(b.y).max(c.y)).ceil() as i64).min(surface.height() as i64 - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }
    let (x0, x1, y0, y1) = (x0 as i32, x1 as i32, y0 as i32, y1 as i32);

    for y in y0..=y1 {
        for x in x0..=x1 {
            if geom::point_in_triangle(Vec2::new(x as f64, y as f64), a, b, c) {
                surface.fill_pixel(x, y, color);
            }
        }
    }
}
