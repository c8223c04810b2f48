//! Shamash engine crate.
//!
//! An interactive 2D scene of shapes rasterized into a caller-provided pixel
//! surface: selection, drag-and-drop, click/double-click/hover dispatch,
//! z-order layering, and a radial ray fan occluded by circles (the sun whose
//! rays are blocked by planets).
//!
//! The engine owns no window, GPU target, or event pump. The host delivers
//! raw pointer events and a monotonic clock, and supplies the pixel sink the
//! scene draws into.

pub mod coords;
pub mod event;
pub mod geom;
pub mod logging;
pub mod rays;
pub mod scene;
pub mod surface;
