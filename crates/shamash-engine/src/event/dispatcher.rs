use crate::coords::Vec2;
use crate::scene::{Scene, ShapeId};

use super::types::{MouseButton, PointerEvent, PointerEventData, PointerEventKind};

/// Double-click detection tuning.
///
/// Defaults match the usual desktop feel; they are configuration, not
/// invariants.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Maximum gap between two presses forming a double-click, in
    /// monotonic milliseconds.
    pub double_click_ms: u64,
    /// Per-axis pixel tolerance between the two presses.
    pub double_click_slop: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            double_click_ms: 300,
            double_click_slop: 5.0,
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct Press {
    at_ms: u64,
    pos: Vec2,
}

/// Pointer-event state machine.
///
/// Holds at most one dragged shape, at most one hovered shape, and the last
/// press for double-click detection. Timing uses the caller-supplied
/// monotonic millisecond tick; the dispatcher never reads a clock itself.
///
/// State transitions per raw event:
/// - button-down: double-click OR click (+ drag start on draggable shapes)
/// - button-up: drag end, exactly once per started drag
/// - motion: drag step to the dragged shape; hover/leave transitions from
///   re-querying the topmost shape, independent of dragging
#[derive(Debug, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
    dragged: Option<ShapeId>,
    hovered: Option<ShapeId>,
    last_press: Option<Press>,
    drag_start: Vec2,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The shape currently being dragged, if any.
    pub fn dragged(&self) -> Option<ShapeId> {
        self.dragged
    }

    /// The shape currently under the pointer, if any.
    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered
    }

    /// Processes one raw pointer event against `scene`. `now_ms` is the
    /// host's monotonic millisecond tick at event time.
    pub fn handle_event(&mut self, scene: &mut Scene, event: PointerEvent, now_ms: u64) {
        match event {
            PointerEvent::ButtonDown { button, x, y } => {
                self.on_button_down(scene, button, x, y, now_ms)
            }
            PointerEvent::ButtonUp { button, x, y } => self.on_button_up(scene, button, x, y),
            PointerEvent::Motion { x, y, dx, dy } => self.on_motion(scene, x, y, dx, dy),
        }
    }

    fn on_button_down(&mut self, scene: &mut Scene, button: MouseButton, x: f64, y: f64, now_ms: u64) {
        if button != MouseButton::Left {
            return;
        }
        let Some(id) = scene.top_shape_at(x, y) else {
            // Empty-space press: no state change, no press recorded.
            return;
        };

        let is_double = self.last_press.is_some_and(|p| {
            now_ms.saturating_sub(p.at_ms) < self.config.double_click_ms
                && (x - p.pos.x).abs() < self.config.double_click_slop
                && (y - p.pos.y).abs() < self.config.double_click_slop
        });

        if is_double {
            // A double-click never starts a drag.
            if let Some(shape) = scene.get_mut(id) {
                let data =
                    PointerEventData::at(PointerEventKind::DoubleClick, x, y).with_button(button);
                shape.on_double_click(&data);
            }
        } else if let Some(shape) = scene.get_mut(id) {
            let data = PointerEventData::at(PointerEventKind::Click, x, y).with_button(button);
            shape.on_click(&data);

            if shape.is_draggable() {
                self.dragged = Some(id);
                self.drag_start = Vec2::new(x, y);
                log::debug!("dispatch: drag start on {id:?} at ({x}, {y})");
                let data =
                    PointerEventData::at(PointerEventKind::DragStart, x, y).with_button(button);
                shape.on_drag_start(&data);
            }
        }

        // Recorded in both branches, so a triple-click chains detection.
        self.last_press = Some(Press {
            at_ms: now_ms,
            pos: Vec2::new(x, y),
        });
    }

    fn on_button_up(&mut self, scene: &mut Scene, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }
        let Some(id) = self.dragged.take() else {
            return;
        };
        // The shape gets its drag end even if `draggable` was cleared
        // mid-drag; capability is gated at drag start only.
        if let Some(shape) = scene.get_mut(id) {
            let data = PointerEventData::at(PointerEventKind::DragEnd, x, y)
                .with_delta(x - self.drag_start.x, y - self.drag_start.y)
                .with_button(button);
            shape.on_drag_end(&data);
            log::debug!("dispatch: drag end on {id:?} at ({x}, {y})");
        }
    }

    fn on_motion(&mut self, scene: &mut Scene, x: f64, y: f64, dx: f64, dy: f64) {
        if let Some(id) = self.dragged {
            match scene.get_mut(id) {
                Some(shape) => {
                    let data = PointerEventData::at(PointerEventKind::Drag, x, y)
                        .with_delta(dx, dy);
                    shape.on_drag(&data);
                }
                // Dragged shape was removed mid-gesture; drop the state.
                None => self.dragged = None,
            }
        }

        // Hover transitions run on every motion, independent of dragging.
        let over = scene.top_shape_at(x, y);
        if over != self.hovered {
            if let Some(old) = self.hovered {
                if let Some(shape) = scene.get_mut(old) {
                    let data = PointerEventData::at(PointerEventKind::Leave, x, y);
                    shape.on_leave(&data);
                }
            }
            self.hovered = over;
            if let Some(new) = over {
                if let Some(shape) = scene.get_mut(new) {
                    let data = PointerEventData::at(PointerEventKind::Hover, x, y);
                    shape.on_hover(&data);
                }
            }
        }
    }
}
