//! Pure geometric predicates.
//!
//! Single source of truth for containment: `Shape::contains`, the shape
//! rasterizers, and the ray tracer's occlusion test all delegate here, so
//! hit-testing and rendering can never disagree.
//!
//! Degenerate inputs (zero or negative extents, collinear triangles) contain
//! no points; callers never get an error out of this module.

use crate::coords::Vec2;

/// Barycentric denominators below this magnitude mark a triangle degenerate.
const DEGENERATE_EPS: f64 = 1e-10;

/// Euclidean containment: distance² ≤ radius². Non-positive radii contain
/// nothing.
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f64) -> bool {
    radius > 0.0 && p.distance_sq(center) <= radius * radius
}

/// Axis-aligned box centered on `center`, edges inclusive. Non-positive
/// extents contain nothing.
#[inline]
pub fn point_in_rect(p: Vec2, center: Vec2, width: f64, height: f64) -> bool {
    if width <= 0.0 || height <= 0.0 {
        return false;
    }
    let hw = width / 2.0;
    let hh = height / 2.0;
    p.x >= center.x - hw && p.x <= center.x + hw && p.y >= center.y - hh && p.y <= center.y + hh
}

/// Barycentric containment, edges inclusive. Collinear (near-zero
/// denominator) triangles contain nothing.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() < DEGENERATE_EPS {
        return false;
    }
    let u = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denom;
    let v = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denom;
    let w = 1.0 - u - v;
    u >= 0.0 && v >= 0.0 && w >= 0.0
}

/// Smallest non-negative `t` at which the half-line `origin + t·dir(angle)`
/// enters the circle, or `None` when the forward half-line misses entirely.
/// An origin already inside the circle yields `t = 0`.
pub fn ray_circle_intersection(origin: Vec2, angle: f64, center: Vec2, radius: f64) -> Option<f64> {
    if radius <= 0.0 {
        return None;
    }
    let r2 = radius * radius;
    let oc = center - origin;
    if oc.dot(oc) <= r2 {
        return Some(0.0);
    }

    let dir = Vec2::from_angle(angle);
    let proj = oc.dot(dir);
    if proj < 0.0 {
        // Circle lies behind the origin.
        return None;
    }
    let perp_sq = oc.dot(oc) - proj * proj;
    if perp_sq > r2 {
        return None;
    }
    Some(proj - (r2 - perp_sq).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── point_in_circle ───────────────────────────────────────────────────

    #[test]
    fn circle_contains_center() {
        assert!(point_in_circle(v(5.0, 5.0), v(5.0, 5.0), 3.0));
    }

    #[test]
    fn circle_edge_inclusive() {
        assert!(point_in_circle(v(8.0, 5.0), v(5.0, 5.0), 3.0));
        assert!(!point_in_circle(v(8.1, 5.0), v(5.0, 5.0), 3.0));
    }

    #[test]
    fn circle_degenerate_contains_nothing() {
        assert!(!point_in_circle(v(5.0, 5.0), v(5.0, 5.0), 0.0));
        assert!(!point_in_circle(v(5.0, 5.0), v(5.0, 5.0), -1.0));
    }

    // ── point_in_rect ─────────────────────────────────────────────────────

    #[test]
    fn rect_contains_center_and_edges() {
        let c = v(10.0, 10.0);
        assert!(point_in_rect(c, c, 4.0, 2.0));
        assert!(point_in_rect(v(12.0, 10.0), c, 4.0, 2.0));
        assert!(point_in_rect(v(8.0, 11.0), c, 4.0, 2.0));
        assert!(!point_in_rect(v(12.1, 10.0), c, 4.0, 2.0));
    }

    #[test]
    fn rect_degenerate_contains_nothing() {
        let c = v(0.0, 0.0);
        assert!(!point_in_rect(c, c, 0.0, 5.0));
        assert!(!point_in_rect(c, c, 5.0, -2.0));
    }

    // ── point_in_triangle ─────────────────────────────────────────────────

    #[test]
    fn triangle_contains_centroid() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        assert!(point_in_triangle(v(10.0 / 3.0, 10.0 / 3.0), a, b, c));
    }

    #[test]
    fn triangle_vertex_and_edge_inclusive() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        assert!(point_in_triangle(a, a, b, c));
        assert!(point_in_triangle(v(5.0, 0.0), a, b, c));
    }

    #[test]
    fn triangle_outside() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        assert!(!point_in_triangle(v(6.0, 6.0), a, b, c));
        assert!(!point_in_triangle(v(-0.1, 0.0), a, b, c));
    }

    #[test]
    fn triangle_collinear_contains_nothing() {
        let (a, b, c) = (v(0.0, 0.0), v(5.0, 5.0), v(10.0, 10.0));
        assert!(!point_in_triangle(v(5.0, 5.0), a, b, c));
    }

    // ── ray_circle_intersection ───────────────────────────────────────────

    #[test]
    fn ray_hits_circle_ahead() {
        let t = ray_circle_intersection(v(0.0, 0.0), 0.0, v(10.0, 0.0), 2.0);
        assert_eq!(t, Some(8.0));
    }

    #[test]
    fn ray_misses_circle_behind() {
        assert!(ray_circle_intersection(v(0.0, 0.0), 0.0, v(-10.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn ray_misses_offset_circle() {
        assert!(ray_circle_intersection(v(0.0, 0.0), 0.0, v(10.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn ray_from_inside_starts_at_zero() {
        let t = ray_circle_intersection(v(10.0, 0.0), PI, v(10.0, 0.0), 2.0);
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn ray_ignores_degenerate_circle() {
        assert!(ray_circle_intersection(v(0.0, 0.0), 0.0, v(10.0, 0.0), 0.0).is_none());
    }
}
