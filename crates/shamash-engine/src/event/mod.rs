//! Pointer-event dispatch.
//!
//! The host's window harness delivers raw pointer events in arrival order,
//! one call per event; the dispatcher turns them into semantic shape events
//! against a [`Scene`](crate::scene::Scene).

mod dispatcher;
mod types;

pub use dispatcher::{DispatchConfig, Dispatcher};
pub use types::{MouseButton, PointerEvent, PointerEventData, PointerEventKind};
