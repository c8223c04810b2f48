//! Coordinate types shared across the engine.
//!
//! Canonical space:
//! - Surface pixels
//! - Origin top-left
//! - +X right, +Y down

mod vec2;

pub use vec2::Vec2;
