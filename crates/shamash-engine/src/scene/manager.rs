use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::coords::Vec2;
use crate::surface::Surface;

use super::options::ShapeOptions;
use super::shape::{Shape, ShapeId};

/// Owner of every shape in the scene.
///
/// Shapes are stored sorted by descending z-order, insertion-stable for equal
/// keys. That one ordering serves both roles: iteration walks from the
/// topmost shape down (so the first containment match in `top_shape_at` is
/// the topmost hit), and [`draw_all`](Scene::draw_all) walks it in reverse so
/// the topmost shape is painted last and visually occludes the rest.
///
/// The highlight-color generator is seeded at construction, so scene setup is
/// deterministic and replayable.
#[derive(Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    next_id: u64,
    rng: StdRng,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Scene whose generated highlight colors derive from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ── ownership ─────────────────────────────────────────────────────────

    /// Inserts an already-built shape (e.g. a clone), assigning it a fresh
    /// handle and re-sorting.
    pub fn insert(&mut self, mut shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        shape.id = id;
        log::debug!(
            "scene: insert {} {:?} at z {}",
            shape.kind_name(),
            id,
            shape.z_order()
        );
        self.shapes.push(shape);
        self.sort_by_z();
        id
    }

    pub fn add_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: u32,
        options: ShapeOptions,
    ) -> ShapeId {
        let shape = Shape::circle(x, y, radius, color, options, &mut self.rng);
        self.insert(shape)
    }

    pub fn add_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: u32,
        options: ShapeOptions,
    ) -> ShapeId {
        let shape = Shape::rect(x, y, width, height, color, options, &mut self.rng);
        self.insert(shape)
    }

    pub fn add_triangle(
        &mut self,
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: u32,
        options: ShapeOptions,
    ) -> ShapeId {
        let shape = Shape::triangle(a, b, c, color, options, &mut self.rng);
        self.insert(shape)
    }

    /// Removes the shape behind `id`; unknown handles are a no-op.
    pub fn remove(&mut self, id: ShapeId) {
        self.shapes.retain(|s| s.id != id);
    }

    /// Removes the shape at `index` in current z-order; out-of-range indices
    /// are a no-op.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.shapes.len() {
            self.shapes.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    // ── handle access ─────────────────────────────────────────────────────

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Shapes in current z-order, topmost first.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    // ── queries ───────────────────────────────────────────────────────────
    //
    // All queries return handles in current z-order, topmost first.

    pub fn visible_shapes(&self) -> Vec<ShapeId> {
        self.ids_where(|s| s.is_visible())
    }

    pub fn selectable_shapes(&self) -> Vec<ShapeId> {
        self.ids_where(|s| s.is_selectable())
    }

    pub fn selected_shapes(&self) -> Vec<ShapeId> {
        self.ids_where(|s| s.is_selected())
    }

    /// Every visible shape containing the point.
    pub fn shapes_at(&self, x: f64, y: f64) -> Vec<ShapeId> {
        self.ids_where(|s| s.is_visible() && s.contains(x, y))
    }

    /// The topmost visible shape containing the point.
    pub fn top_shape_at(&self, x: f64, y: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|s| s.is_visible() && s.contains(x, y))
            .map(|s| s.id)
    }

    fn ids_where(&self, pred: impl Fn(&Shape) -> bool) -> Vec<ShapeId> {
        self.shapes.iter().filter(|s| pred(s)).map(|s| s.id).collect()
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Selects the shape if it is selectable; otherwise a no-op.
    pub fn select(&mut self, id: ShapeId) {
        if let Some(shape) = self.get_mut(id) {
            if shape.is_selectable() {
                shape.set_selected(true);
            }
        }
    }

    /// Deselection is unconditional.
    pub fn deselect(&mut self, id: ShapeId) {
        if let Some(shape) = self.get_mut(id) {
            shape.set_selected(false);
        }
    }

    pub fn select_all(&mut self) {
        for shape in &mut self.shapes {
            if shape.is_selectable() {
                shape.set_selected(true);
            }
        }
    }

    pub fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
    }

    // ── z-order ───────────────────────────────────────────────────────────
    //
    // Every operation re-sorts; the sort is stable, so the relative order of
    // untouched shapes is preserved.

    /// Moves the shape in front of everything else: max z over the *other*
    /// shapes, plus one.
    pub fn bring_to_front(&mut self, id: ShapeId) {
        let Some(max_z) = self.z_extent(id, i32::max) else {
            return;
        };
        if let Some(shape) = self.get_mut(id) {
            shape.set_z_order(max_z.saturating_add(1));
            self.sort_by_z();
        }
    }

    /// Moves the shape behind everything else: min z over the *other*
    /// shapes, minus one.
    pub fn send_to_back(&mut self, id: ShapeId) {
        let Some(min_z) = self.z_extent(id, i32::min) else {
            return;
        };
        if let Some(shape) = self.get_mut(id) {
            shape.set_z_order(min_z.saturating_sub(1));
            self.sort_by_z();
        }
    }

    pub fn move_up(&mut self, id: ShapeId) {
        if let Some(shape) = self.get_mut(id) {
            shape.set_z_order(shape.z_order().saturating_add(1));
            self.sort_by_z();
        }
    }

    pub fn move_down(&mut self, id: ShapeId) {
        if let Some(shape) = self.get_mut(id) {
            shape.set_z_order(shape.z_order().saturating_sub(1));
            self.sort_by_z();
        }
    }

    /// Folds z-orders of every shape except `id`; `None` when `id` is
    /// unknown. A scene holding only `id` folds from zero.
    fn z_extent(&self, id: ShapeId, fold: impl Fn(i32, i32) -> i32) -> Option<i32> {
        self.get(id)?;
        Some(
            self.shapes
                .iter()
                .filter(|s| s.id != id)
                .map(|s| s.z_order())
                .fold(0, fold),
        )
    }

    fn sort_by_z(&mut self) {
        // Stable: equal keys keep insertion order. Descending, topmost first.
        self.shapes.sort_by(|a, b| b.z_order().cmp(&a.z_order()));
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Draws every shape back-to-front. Per-shape visibility is honored
    /// inside `Shape::draw`.
    pub fn draw_all(&self, surface: &mut dyn Surface) {
        for shape in self.shapes.iter().rev() {
            shape.draw(surface);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::surface::Framebuffer;

    fn opts() -> ShapeOptions {
        ShapeOptions::new()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut scene = Scene::new();
        let a = scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        let b = scene.add_circle(0.0, 0.0, 1.0, 2, opts());
        let c = scene.add_circle(0.0, 0.0, 1.0, 3, opts());
        let order: Vec<ShapeId> = scene.iter().map(|s| s.id()).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn higher_z_iterates_first() {
        let mut scene = Scene::new();
        let back = scene.add_circle(0.0, 0.0, 1.0, 1, opts().z_order(-1));
        let front = scene.add_circle(0.0, 0.0, 1.0, 2, opts().z_order(5));
        let mid = scene.add_circle(0.0, 0.0, 1.0, 3, opts().z_order(2));
        let order: Vec<ShapeId> = scene.iter().map(|s| s.id()).collect();
        assert_eq!(order, vec![front, mid, back]);
    }

    #[test]
    fn bring_to_front_wins_hit_test() {
        let mut scene = Scene::new();
        let a = scene.add_circle(10.0, 10.0, 5.0, 1, opts());
        let b = scene.add_circle(10.0, 10.0, 5.0, 2, opts());
        assert_eq!(scene.top_shape_at(10.0, 10.0), Some(a));

        scene.bring_to_front(b);
        assert_eq!(scene.top_shape_at(10.0, 10.0), Some(b));

        scene.bring_to_front(a);
        assert_eq!(scene.top_shape_at(10.0, 10.0), Some(a));
    }

    #[test]
    fn send_to_back_loses_hit_test() {
        let mut scene = Scene::new();
        let a = scene.add_circle(10.0, 10.0, 5.0, 1, opts());
        let b = scene.add_circle(10.0, 10.0, 5.0, 2, opts());
        scene.send_to_back(a);
        assert_eq!(scene.top_shape_at(10.0, 10.0), Some(b));
        assert!(scene.get(a).unwrap().z_order() < scene.get(b).unwrap().z_order());
    }

    #[test]
    fn z_ops_preserve_untouched_relative_order() {
        let mut scene = Scene::new();
        let a = scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        let b = scene.add_circle(0.0, 0.0, 1.0, 2, opts());
        let c = scene.add_circle(0.0, 0.0, 1.0, 3, opts());
        scene.bring_to_front(c);
        let order: Vec<ShapeId> = scene.iter().map(|s| s.id()).collect();
        assert_eq!(order, vec![c, a, b]);
    }

    #[test]
    fn move_up_and_down_shift_by_one() {
        let mut scene = Scene::new();
        let a = scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        scene.move_up(a);
        assert_eq!(scene.get(a).unwrap().z_order(), 1);
        scene.move_down(a);
        scene.move_down(a);
        assert_eq!(scene.get(a).unwrap().z_order(), -1);
    }

    // ── removal and handles ───────────────────────────────────────────────

    #[test]
    fn removed_handle_yields_none() {
        let mut scene = Scene::new();
        let a = scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        scene.remove(a);
        assert!(scene.get(a).is_none());
        assert!(scene.is_empty());

        // Removing again is a no-op.
        scene.remove(a);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut scene = Scene::new();
        scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        scene.remove_at(5);
        assert_eq!(scene.len(), 1);
        scene.remove_at(0);
        assert!(scene.is_empty());
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut scene = Scene::new();
        let a = scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        scene.clear();
        assert!(scene.get(a).is_none());
    }

    #[test]
    fn inserted_clone_gets_fresh_handle() {
        let mut scene = Scene::new();
        let a = scene.add_circle(5.0, 5.0, 2.0, 1, opts());
        let clone = scene.get(a).unwrap().clone_shape();
        let b = scene.insert(clone);
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[test]
    fn queries_filter_and_keep_order() {
        let mut scene = Scene::new();
        let vis = scene.add_circle(10.0, 10.0, 5.0, 1, opts().z_order(1));
        let hidden = scene.add_circle(10.0, 10.0, 5.0, 2, opts().visible(false));
        let sel = scene.add_rect(10.0, 10.0, 4.0, 4.0, 3, opts().selectable(true));

        assert_eq!(scene.visible_shapes(), vec![vis, sel]);
        assert_eq!(scene.selectable_shapes(), vec![sel]);
        assert_eq!(scene.shapes_at(10.0, 10.0), vec![vis, sel]);
        assert!(!scene.shapes_at(10.0, 10.0).contains(&hidden));
    }

    #[test]
    fn hidden_shapes_are_not_hit() {
        let mut scene = Scene::new();
        let a = scene.add_circle(10.0, 10.0, 5.0, 1, opts().visible(false));
        assert_eq!(scene.top_shape_at(10.0, 10.0), None);
        scene.get_mut(a).unwrap().set_visible(true);
        assert_eq!(scene.top_shape_at(10.0, 10.0), Some(a));
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn select_requires_selectable_deselect_does_not() {
        let mut scene = Scene::new();
        let plain = scene.add_circle(0.0, 0.0, 1.0, 1, opts());
        let sel = scene.add_circle(0.0, 0.0, 1.0, 2, opts().selectable(true));

        scene.select(plain);
        scene.select(sel);
        assert_eq!(scene.selected_shapes(), vec![sel]);

        // Force-select through the shape, then verify deselect is unconditional.
        scene.get_mut(plain).unwrap().set_selected(true);
        scene.deselect(plain);
        assert!(!scene.get(plain).unwrap().is_selected());
    }

    #[test]
    fn select_all_and_deselect_all() {
        let mut scene = Scene::new();
        scene.add_circle(0.0, 0.0, 1.0, 1, opts().selectable(true));
        scene.add_circle(0.0, 0.0, 1.0, 2, opts());
        scene.add_rect(0.0, 0.0, 2.0, 2.0, 3, opts().selectable(true));

        scene.select_all();
        assert_eq!(scene.selected_shapes().len(), 2);

        scene.deselect_all();
        assert!(scene.selected_shapes().is_empty());
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn draw_all_paints_topmost_last() {
        let mut scene = Scene::new();
        scene.add_rect(4.0, 4.0, 8.0, 8.0, 0xaa, opts().z_order(1));
        scene.add_rect(4.0, 4.0, 8.0, 8.0, 0xbb, opts().z_order(0));

        let mut fb = Framebuffer::new(8, 8);
        scene.draw_all(&mut fb);
        assert_eq!(fb.pixel(4, 4), Some(0xaa));
    }

    #[test]
    fn draw_all_skips_invisible_shapes() {
        let mut scene = Scene::new();
        scene.add_rect(4.0, 4.0, 8.0, 8.0, 0xaa, opts().visible(false));
        let mut fb = Framebuffer::new(8, 8);
        scene.draw_all(&mut fb);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn selected_shape_draws_highlight_color() {
        let mut scene = Scene::new();
        let a = scene.add_rect(
            4.0,
            4.0,
            8.0,
            8.0,
            0xaa,
            opts().selectable(true).highlight_color(0xcc),
        );
        scene.select(a);

        let mut fb = Framebuffer::new(8, 8);
        scene.draw_all(&mut fb);
        assert_eq!(fb.pixel(4, 4), Some(0xcc));
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn same_seed_generates_same_highlights() {
        let mut a = Scene::with_seed(42);
        let mut b = Scene::with_seed(42);
        let ia = a.add_circle(0.0, 0.0, 1.0, 0, opts());
        let ib = b.add_circle(0.0, 0.0, 1.0, 0, opts());
        assert_eq!(
            a.get(ia).unwrap().highlight_color(),
            b.get(ib).unwrap().highlight_color()
        );
    }
}
