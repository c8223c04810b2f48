use std::fmt;

use rand::RngCore;

use crate::coords::Vec2;
use crate::event::PointerEventData;
use crate::geom;
use crate::surface::Surface;

use super::options::{ShapeCallback, ShapeOptions};
use super::shapes;

/// Handle to a scene-owned shape.
///
/// Copyable and stable for as long as the shape stays in its scene. Lookups
/// with a handle whose shape has been removed (or whose scene was cleared)
/// return `None`; re-query instead of caching handles across removals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u64);

/// Per-variant geometry.
///
/// Shared state lives on [`Shape`]; every polymorphic operation dispatches
/// with a single `match` here. Extending the scene:
/// - add a variant with its geometry fields
/// - add a rasterizer module under `scene::shapes::*`
/// - extend the `match` arms in `Shape::{contains, draw, translate}`
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
    Triangle { a: Vec2, b: Vec2, c: Vec2 },
}

/// A drawable, hit-testable scene entity.
///
/// Construction goes through the [`Scene`](super::Scene) factories (or the
/// kind-specific constructors plus [`Scene::insert`](super::Scene::insert));
/// the scene owns the shape and hands out [`ShapeId`] handles.
pub struct Shape {
    pub(crate) id: ShapeId,
    kind: ShapeKind,
    pos: Vec2,
    color: u32,
    highlight_color: u32,
    visible: bool,
    selectable: bool,
    draggable: bool,
    clickable: bool,
    z_order: i32,
    selected: bool,
    dragging: bool,
    click_action: Option<ShapeCallback>,
    double_click_action: Option<ShapeCallback>,
    drag_action: Option<ShapeCallback>,
    hover_action: Option<ShapeCallback>,
}

/// Non-zero packed color for selection highlighting.
fn random_highlight(rng: &mut dyn RngCore) -> u32 {
    loop {
        let color = rng.next_u32();
        if color != 0 {
            return color;
        }
    }
}

impl Shape {
    pub(crate) fn new(
        kind: ShapeKind,
        pos: Vec2,
        color: u32,
        options: ShapeOptions,
        rng: &mut dyn RngCore,
    ) -> Self {
        let highlight_color = match options.highlight_color {
            Some(c) if c != 0 => c,
            _ => random_highlight(rng),
        };
        Self {
            id: ShapeId(0),
            kind,
            pos,
            color,
            highlight_color,
            visible: options.visible,
            selectable: options.selectable,
            draggable: options.draggable,
            clickable: options.clickable,
            z_order: options.z_order,
            selected: false,
            dragging: false,
            click_action: options.on_click,
            double_click_action: options.on_double_click,
            drag_action: options.on_drag,
            hover_action: options.on_hover,
        }
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Variant name for diagnostics and logging.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Triangle { .. } => "triangle",
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    #[inline]
    pub fn highlight_color(&self) -> u32 {
        self.highlight_color
    }

    pub fn set_highlight_color(&mut self, color: u32) {
        self.highlight_color = color;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    #[inline]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    #[inline]
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    #[inline]
    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    /// Sets the layering key. The scene re-sorts on its own z-order
    /// operations; prefer those when the shape is already owned by a scene.
    pub fn set_z_order(&mut self, z: i32) {
        self.z_order = z;
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Pure containment test; agrees exactly with the rasterized interior
    /// and with the occlusion test in [`geom`].
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let p = Vec2::new(x, y);
        match self.kind {
            ShapeKind::Circle { radius } => geom::point_in_circle(p, self.pos, radius),
            ShapeKind::Rect { width, height } => geom::point_in_rect(p, self.pos, width, height),
            ShapeKind::Triangle { a, b, c } => geom::point_in_triangle(p, a, b, c),
        }
    }

    /// Translates by a delta. Triangles move all three vertices and recompute
    /// the centroid.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match &mut self.kind {
            ShapeKind::Triangle { a, b, c } => {
                let d = Vec2::new(dx, dy);
                *a += d;
                *b += d;
                *c += d;
                self.pos = shapes::triangle::centroid(*a, *b, *c);
            }
            _ => {
                self.pos.x += dx;
                self.pos.y += dy;
            }
        }
    }

    /// Moves the shape's position to (`x`, `y`). For a triangle the position
    /// is its centroid, so this translates the vertices until the centroid
    /// lands on the target point.
    pub fn set_position(&mut self, x: f64, y: f64) {
        match self.kind {
            ShapeKind::Triangle { .. } => {
                let (dx, dy) = (x - self.pos.x, y - self.pos.y);
                self.translate(dx, dy);
            }
            _ => self.pos = Vec2::new(x, y),
        }
    }

    /// Rasterizes the filled interior into `surface`; no-op unless visible.
    /// Selected shapes fill with the highlight color. Pixels outside the
    /// surface are silently clipped.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }
        let color = if self.selected { self.highlight_color } else { self.color };
        match self.kind {
            ShapeKind::Circle { radius } => shapes::circle::fill(surface, self.pos, radius, color),
            ShapeKind::Rect { width, height } => {
                shapes::rect::fill(surface, self.pos, width, height, color)
            }
            ShapeKind::Triangle { a, b, c } => shapes::triangle::fill(surface, a, b, c, color),
        }
    }

    /// Independent copy preserving geometry, colors, options, and actions.
    /// Runtime state starts fresh: the clone is unselected and not dragging.
    /// Inserting the clone into a scene assigns it a new handle.
    pub fn clone_shape(&self) -> Shape {
        Shape {
            id: self.id,
            kind: self.kind.clone(),
            pos: self.pos,
            color: self.color,
            highlight_color: self.highlight_color,
            visible: self.visible,
            selectable: self.selectable,
            draggable: self.draggable,
            clickable: self.clickable,
            z_order: self.z_order,
            selected: false,
            dragging: false,
            click_action: self.click_action.clone(),
            double_click_action: self.double_click_action.clone(),
            drag_action: self.drag_action.clone(),
            hover_action: self.hover_action.clone(),
        }
    }

    // ── dispatcher entry points ───────────────────────────────────────────
    //
    // Invoked by the event dispatcher only; shapes never self-trigger these.
    // The action Rc is cloned before the call so the closure can freely
    // mutate the shape it is attached to.

    pub fn on_click(&mut self, data: &PointerEventData) {
        if !self.clickable {
            return;
        }
        if let Some(action) = self.click_action.clone() {
            (&mut *action.borrow_mut())(self, data);
        }
    }

    pub fn on_double_click(&mut self, data: &PointerEventData) {
        if !self.clickable {
            return;
        }
        if let Some(action) = self.double_click_action.clone() {
            (&mut *action.borrow_mut())(self, data);
        }
    }

    /// Enters the drag state; gated on `draggable`. Capability is checked
    /// only here; once dragging, the gesture runs to its drag end.
    pub fn on_drag_start(&mut self, _data: &PointerEventData) {
        if self.draggable {
            self.dragging = true;
        }
    }

    /// Applies the event's incremental delta to the position and fires the
    /// drag action. Only while dragging.
    pub fn on_drag(&mut self, data: &PointerEventData) {
        if !self.dragging {
            return;
        }
        self.translate(data.dx, data.dy);
        if let Some(action) = self.drag_action.clone() {
            (&mut *action.borrow_mut())(self, data);
        }
    }

    /// Unconditionally leaves the drag state, then fires the drag action
    /// once with the cumulative displacement.
    pub fn on_drag_end(&mut self, data: &PointerEventData) {
        self.dragging = false;
        if let Some(action) = self.drag_action.clone() {
            (&mut *action.borrow_mut())(self, data);
        }
    }

    /// Fires the hover action; no capability gate.
    pub fn on_hover(&mut self, data: &PointerEventData) {
        if let Some(action) = self.hover_action.clone() {
            (&mut *action.borrow_mut())(self, data);
        }
    }

    /// Fires the hover action with the leave payload; no capability gate.
    pub fn on_leave(&mut self, data: &PointerEventData) {
        if let Some(action) = self.hover_action.clone() {
            (&mut *action.borrow_mut())(self, data);
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("pos", &self.pos)
            .field("color", &self.color)
            .field("z_order", &self.z_order)
            .field("visible", &self.visible)
            .field("selected", &self.selected)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}
