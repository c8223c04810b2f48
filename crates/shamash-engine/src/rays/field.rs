use std::f64::consts::TAU;

use crate::coords::Vec2;
use crate::geom;
use crate::surface::Surface;

/// Ray fan tuning. Defaults mirror the classic 360-ray, one-pixel-step sun.
/// Both values are configuration, not invariants.
#[derive(Debug, Clone)]
pub struct RayConfig {
    /// Number of rays, evenly spaced over a full turn.
    pub ray_count: usize,
    /// Trace step length in pixels.
    pub step: f64,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            ray_count: 360,
            step: 1.0,
        }
    }
}

/// One ray of the fan: anchor point plus direction angle in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub angle: f64,
}

/// A circle that blocks ray propagation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Occluder {
    pub center: Vec2,
    pub radius: f64,
}

impl Occluder {
    #[inline]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// The radial fan. Transient render input owned by no shape: regenerate
/// whenever the source moves, trace every frame.
#[derive(Debug)]
pub struct RayField {
    config: RayConfig,
    rays: Vec<Ray>,
}

impl RayField {
    pub fn new(config: RayConfig) -> Self {
        Self {
            rays: Vec::with_capacity(config.ray_count),
            config,
        }
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Rebuilds the fan anchored at `origin`: N rays at angles `i·2π/N`.
    /// O(N); cheap enough to run on every source movement.
    pub fn regenerate(&mut self, origin: Vec2) {
        self.rays.clear();
        let n = self.config.ray_count;
        for i in 0..n {
            self.rays.push(Ray {
                origin,
                angle: TAU * i as f64 / n as f64,
            });
        }
        log::trace!("rays: regenerated {n} rays at ({}, {})", origin.x, origin.y);
    }

    /// Traces and paints every ray.
    ///
    /// Per step the surface bounds check runs first, then the occluders in
    /// slice order; the first failing check terminates the ray without
    /// painting, so the terminal pixel is the last one painted before
    /// termination. Rays never wrap or reflect.
    ///
    /// Worst case O(rays × trace length × occluders); this is the dominant
    /// cost of a frame.
    pub fn trace(&self, surface: &mut dyn Surface, occluders: &[Occluder], color: u32) {
        if self.config.step <= 0.0 {
            return;
        }
        for ray in &self.rays {
            trace_ray(surface, ray, self.config.step, occluders, color);
        }
    }
}

fn trace_ray(surface: &mut dyn Surface, ray: &Ray, step: f64, occluders: &[Occluder], color: u32) {
    // A ray whose forward half-line misses every occluder can skip the
    // per-step occlusion tests; the painted pixels are identical.
    let occludable = occluders.iter().any(|o| {
        geom::ray_circle_intersection(ray.origin, ray.angle, o.center, o.radius).is_some()
    });

    let dir = Vec2::from_angle(ray.angle) * step;
    let mut pos = ray.origin;
    if !pos.is_finite() || !dir.is_finite() {
        return;
    }

    loop {
        let (px, py) = (pos.x.floor() as i64, pos.y.floor() as i64);
        if px < 0 || py < 0 || px >= surface.width() as i64 || py >= surface.height() as i64 {
            return;
        }
        if occludable
            && occluders
                .iter()
                .any(|o| geom::point_in_circle(pos, o.center, o.radius))
        {
            return;
        }
        surface.fill_pixel(px as i32, py as i32, color);
        pos += dir;
    }
}
