//! Radial ray field with circular occluders.
//!
//! The "sun whose rays are blocked by planets" effect: a fan of rays anchored
//! at a source circle's center, each traced pixel-by-pixel until it leaves
//! the surface or enters an occluder.

mod field;

pub use field::{Occluder, Ray, RayConfig, RayField};
