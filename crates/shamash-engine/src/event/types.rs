/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Raw pointer event delivered by the host.
///
/// Coordinates are absolute surface pixels. `Motion` additionally carries the
/// incremental delta since the previous motion event; the dispatcher never
/// reconstructs deltas from positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    ButtonDown { button: MouseButton, x: f64, y: f64 },
    ButtonUp { button: MouseButton, x: f64, y: f64 },
    Motion { x: f64, y: f64, dx: f64, dy: f64 },
}

/// Semantic event kind produced by the dispatcher.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerEventKind {
    Click,
    DoubleClick,
    DragStart,
    /// `dx`/`dy` carry the incremental motion delta, not the cumulative
    /// displacement since drag start.
    Drag,
    /// `dx`/`dy` carry the total displacement from drag start to release.
    DragEnd,
    Hover,
    /// Pointer moved off the shape. Delivered through the hover action.
    Leave,
}

/// Payload handed to shape event actions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEventData {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub button: Option<MouseButton>,
}

impl PointerEventData {
    #[inline]
    pub fn at(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y, dx: 0.0, dy: 0.0, button: None }
    }

    #[inline]
    pub fn with_delta(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    #[inline]
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }
}
