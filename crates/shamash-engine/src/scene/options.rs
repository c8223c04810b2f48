use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::event::PointerEventData;

use super::Shape;

/// Per-shape event action.
///
/// Shared (`Rc`) so a cloned shape keeps firing the same action, `RefCell`
/// because actions mutate their captured state. The scene is single-threaded,
/// so neither is ever contended; re-entering the same action from inside
/// itself is not supported.
pub type ShapeCallback = Rc<RefCell<dyn FnMut(&mut Shape, &PointerEventData)>>;

/// Wraps a closure as a [`ShapeCallback`].
pub fn callback(f: impl FnMut(&mut Shape, &PointerEventData) + 'static) -> ShapeCallback {
    Rc::new(RefCell::new(f))
}

/// Construction options shared by every shape kind.
///
/// Builder-style: start from [`ShapeOptions::new`] and chain.
///
/// ```rust,ignore
/// scene.add_circle(200.0, 150.0, 40.0, 0xffd54a, ShapeOptions::new()
///     .draggable(true)
///     .clickable(true)
///     .z_order(10)
///     .on_click(|shape, ev| log::info!("{} clicked at ({}, {})", shape.kind_name(), ev.x, ev.y)));
/// ```
#[derive(Clone)]
pub struct ShapeOptions {
    /// Drawn at all. Invisible shapes are skipped by hit-testing too.
    pub visible: bool,
    /// Participates in selection queries and `select` operations.
    pub selectable: bool,
    /// May enter the drag state on a press.
    pub draggable: bool,
    /// Click/double-click actions fire.
    pub clickable: bool,
    /// Initial layering key; higher is in front.
    pub z_order: i32,
    /// Highlight color override. A random non-zero color is generated when
    /// unset (or set to zero).
    pub highlight_color: Option<u32>,
    pub on_click: Option<ShapeCallback>,
    pub on_double_click: Option<ShapeCallback>,
    pub on_drag: Option<ShapeCallback>,
    pub on_hover: Option<ShapeCallback>,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            visible: true,
            selectable: false,
            draggable: false,
            clickable: false,
            z_order: 0,
            highlight_color: None,
            on_click: None,
            on_double_click: None,
            on_drag: None,
            on_hover: None,
        }
    }
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, v: bool) -> Self {
        self.visible = v;
        self
    }

    pub fn selectable(mut self, v: bool) -> Self {
        self.selectable = v;
        self
    }

    pub fn draggable(mut self, v: bool) -> Self {
        self.draggable = v;
        self
    }

    pub fn clickable(mut self, v: bool) -> Self {
        self.clickable = v;
        self
    }

    pub fn z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    pub fn highlight_color(mut self, color: u32) -> Self {
        self.highlight_color = Some(color);
        self
    }

    /// Action fired on click (requires `clickable`).
    pub fn on_click(mut self, f: impl FnMut(&mut Shape, &PointerEventData) + 'static) -> Self {
        self.on_click = Some(callback(f));
        self
    }

    /// Action fired on double-click (requires `clickable`).
    pub fn on_double_click(
        mut self,
        f: impl FnMut(&mut Shape, &PointerEventData) + 'static,
    ) -> Self {
        self.on_double_click = Some(callback(f));
        self
    }

    /// Action fired on every drag step and once more on drag end.
    pub fn on_drag(mut self, f: impl FnMut(&mut Shape, &PointerEventData) + 'static) -> Self {
        self.on_drag = Some(callback(f));
        self
    }

    /// Action fired on hover and leave transitions; no capability gate.
    pub fn on_hover(mut self, f: impl FnMut(&mut Shape, &PointerEventData) + 'static) -> Self {
        self.on_hover = Some(callback(f));
        self
    }
}

impl fmt::Debug for ShapeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeOptions")
            .field("visible", &self.visible)
            .field("selectable", &self.selectable)
            .field("draggable", &self.draggable)
            .field("clickable", &self.clickable)
            .field("z_order", &self.z_order)
            .field("highlight_color", &self.highlight_color)
            .field("on_click", &self.on_click.is_some())
            .field("on_double_click", &self.on_double_click.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_hover", &self.on_hover.is_some())
            .finish()
    }
}
