use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::cell::Cell;

use crate::transform::transform_for;
use crate::{
    CoverflowOptions, CoverflowState, Geometry, ItemTransform, Orientation, Size, TransformStyle,
};

/// Base class hosts put on the widget's root element.
pub const BASE_CLASS: &str = "coverflow";

/// Class hosts put on each item's inner element (the visible content box).
pub const ITEM_BASE_CLASS: &str = "coverflow-item-inner";

/// A headless coverflow engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with gesture deltas, taps, and container boxes.
/// - Rendering is exposed as per-item transform descriptors
///   (`transform_for` / `for_each_transform`) plus the strip offset.
///
/// For snap transitions and collaborator sync, see the `coverflow-adapter`
/// crate.
///
/// Selection is two-mode: before the first [`refresh`](Self::refresh) the
/// configured index is held as a pending value; once rendered, the selected
/// index is derived from the strip offset and is authoritative over the
/// stored value.
#[derive(Clone, Debug)]
pub struct Coverflow {
    options: CoverflowOptions,
    style: TransformStyle,
    offset: f32,
    /// Stored/pending selection. Live-updated whenever an item enters the
    /// centered window; authoritative only while not rendered.
    selected_index: usize,
    last_selection: Option<usize>,
    geometry: Option<Geometry>,
    orientation: Option<Orientation>,
    dragging: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Coverflow {
    /// Creates a new engine from options.
    ///
    /// The transform style is resolved here, once, from `options.flat` and
    /// the injected platform profile, and stays fixed for the engine's
    /// lifetime.
    pub fn new(options: CoverflowOptions) -> Self {
        let style = TransformStyle::resolve(options.flat, options.platform);
        cfdebug!(
            count = options.count,
            selected_index = options.selected_index,
            flat = style.is_flat(),
            "Coverflow::new"
        );
        Self {
            style,
            offset: 0.0,
            selected_index: options.selected_index,
            last_selection: None,
            geometry: None,
            orientation: None,
            dragging: false,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CoverflowOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn style(&self) -> TransformStyle {
        self.style
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a layout pass has produced geometry yet.
    pub fn rendered(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Class hosts put on the root element for the current orientation,
    /// e.g. `coverflow-landscape`. `None` before the first refresh.
    pub fn orientation_class(&self) -> Option<String> {
        self.orientation
            .map(|o| format!("{BASE_CLASS}-{}", o.as_str()))
    }

    /// Wrapper class derived from the configured `item_class`.
    pub fn item_wrap_class(&self) -> Option<String> {
        self.options
            .item_class
            .as_ref()
            .map(|cls| format!("{cls}-wrap"))
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Coverflow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_selection_change(
        &mut self,
        on_selection_change: Option<impl Fn(&Coverflow, usize) + Send + Sync + 'static>,
    ) {
        self.options.on_selection_change = on_selection_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.dragging);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when a host applies several changes per event (offset plus
    /// drag state, geometry plus selection) and `on_change` drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn fire_selection_change(&mut self, index: usize) {
        if self.last_selection == Some(index) {
            return;
        }
        self.last_selection = Some(index);
        cfdebug!(index, "selection changed");
        if let Some(cb) = &self.options.on_selection_change {
            cb(self, index);
        }
    }

    /// Sets the strip offset directly.
    ///
    /// Gesture and snap paths funnel through here; whenever the new offset
    /// puts an item inside the centered window, that index becomes the
    /// tracked selection. Non-finite offsets are rejected.
    pub fn set_offset(&mut self, offset: f32) {
        if !offset.is_finite() {
            cfwarn!(offset, "ignoring non-finite offset");
            return;
        }
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        if let Some(centered) = self.centered_index() {
            self.selected_index = centered;
        }
        self.notify();
    }

    /// The index currently inside the centered window, if any.
    ///
    /// The window is at most one gap wide, so the only possible candidate is
    /// the anchor nearest the offset; ties at exactly half a gap resolve to
    /// the lower index through the window's half-open bounds.
    fn centered_index(&self) -> Option<usize> {
        let bounds = self.geometry.as_ref()?.bounds;
        if !bounds.has_valid_gap() || self.options.count == 0 {
            return None;
        }
        let anchor = -self.offset / bounds.gap;
        let candidate = -floor_to_i64(0.5 - anchor); // ceil(anchor - 1/2)
        if candidate < 0 || candidate as usize >= self.options.count {
            return None;
        }
        let ix = candidate as f32 * bounds.gap + self.offset;
        (ix >= -bounds.threshold && ix < bounds.threshold).then_some(candidate as usize)
    }

    /// The active item index.
    ///
    /// Once rendered with a valid gap, this is derived from the offset
    /// (`round(-offset / gap)`, clamped) and is authoritative over the stored
    /// value; before that it answers the stored/pending value.
    pub fn selected_index(&self) -> usize {
        if let Some(g) = &self.geometry {
            if g.bounds.has_valid_gap() && self.options.count > 0 {
                let index = round_half_up(-self.offset / g.bounds.gap);
                return index.clamp(0, self.options.count as i64 - 1) as usize;
            }
        }
        self.selected_index
    }

    /// Clamps `index`, aligns the offset to it, and records it as the stored
    /// selection. `None` when not rendered, empty, or the gap is degenerate.
    fn snap_to_index(&mut self, index: usize) -> Option<usize> {
        let bounds = self.geometry.as_ref()?.bounds;
        if !bounds.has_valid_gap() || self.options.count == 0 {
            return None;
        }
        let index = index.min(self.options.count - 1);
        self.selected_index = index;
        self.set_offset(-(index as f32) * bounds.gap);
        Some(index)
    }

    /// Programmatically selects an item.
    ///
    /// Before the first layout the raw index is stored as pending. Once
    /// rendered it is clamped, the strip snaps to it, and the selection
    /// notification fires.
    pub fn set_selected_index(&mut self, index: usize) {
        if self.rendered() {
            if let Some(applied) = self.snap_to_index(index) {
                self.fire_selection_change(applied);
            } else {
                // Empty collection or degenerate gap: clamp the stored value
                // and wait for items/geometry.
                self.selected_index = if self.options.count == 0 {
                    0
                } else {
                    index.min(self.options.count - 1)
                };
                self.notify();
            }
        } else {
            cftrace!(index, "selection pending until first layout");
            self.selected_index = index;
        }
    }

    /// Enters the Dragging state. Hosts should stop eased following of the
    /// strip until the drag ends.
    pub fn drag_start(&mut self) {
        if self.dragging {
            return;
        }
        self.dragging = true;
        cftrace!("drag_start");
        self.notify();
    }

    /// Applies one drag step while Dragging.
    ///
    /// Dragging outward past the first or last item halves the delta for
    /// boundary resistance. Deltas outside a drag are ignored.
    pub fn drag_update(&mut self, delta_x: f32) {
        if !self.dragging {
            cftrace!("drag_update outside a drag; ignoring");
            return;
        }
        if !delta_x.is_finite() {
            cfwarn!(delta_x, "ignoring non-finite drag delta");
            return;
        }
        let count = self.options.count;
        let mut delta = delta_x;
        if count > 0 {
            let selected = self.selected_index();
            if (selected == 0 && delta_x > 0.0) || (selected == count - 1 && delta_x < 0.0) {
                delta *= 0.5;
            }
        }
        self.set_offset(self.offset + delta);
    }

    /// Exits the Dragging state and snaps to the nearest index.
    ///
    /// Returns the applied index, or `None` when there was nothing to snap to
    /// (not rendered, empty collection, degenerate gap). There is no separate
    /// cancel: treat any interruption as a `drag_end` at the last known
    /// offset.
    pub fn drag_end(&mut self) -> Option<usize> {
        if !self.dragging {
            return None;
        }
        let mut applied = None;
        self.batch_update(|c| {
            c.dragging = false;
            cftrace!(offset = c.offset, "drag_end");
            let index = c.selected_index();
            applied = c.snap_to_index(index);
            // Hosts re-enable eased following even when the offset is already
            // aligned.
            c.notify();
        });
        if let Some(index) = applied {
            self.fire_selection_change(index);
        }
        applied
    }

    /// Handles an item tap. Returns whether a selection was applied.
    pub fn tap(&mut self, index: usize) -> bool {
        if self.options.prevent_selection_on_item_tap {
            return false;
        }
        if index == self.selected_index() {
            return false;
        }
        self.set_selected_index(index);
        true
    }

    /// Recomputes geometry for a container box and re-snaps the strip.
    ///
    /// Run this on paint, resize, and (unless configured off) orientation
    /// change. Idempotent for an unchanged box and item count.
    pub fn refresh(&mut self, container: Size, orientation: Orientation) {
        self.batch_update(|c| {
            c.orientation = Some(orientation);
            let geometry = Geometry::compute(container, c.style);
            cfdebug!(
                gap = geometry.bounds.gap,
                threshold = geometry.bounds.threshold,
                delta = geometry.bounds.delta,
                "refresh"
            );
            c.geometry = Some(geometry);
            let index = c.selected_index;
            c.set_selected_index(index);
            c.notify();
        });
    }

    /// Updates the item count after a data mutation.
    ///
    /// Clamps the stored selection and, when rendered, re-aligns the offset.
    /// No selection notification fires here; the refresh that follows a data
    /// mutation delivers it.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        cfdebug!(count, "set_count");
        self.batch_update(|c| {
            c.options.count = count;
            if count == 0 {
                c.selected_index = 0;
            } else {
                if c.selected_index >= count {
                    c.selected_index = count - 1;
                }
                if c.rendered() {
                    let index = c.selected_index;
                    c.snap_to_index(index);
                }
            }
            c.notify();
        });
    }

    /// The transform for one realized item, or `None` before the first
    /// layout or for an out-of-range index.
    pub fn transform_for(&self, index: usize) -> Option<ItemTransform> {
        let g = self.geometry.as_ref()?;
        (index < self.options.count)
            .then(|| transform_for(index, self.offset, &g.bounds, self.options.angle, self.style))
    }

    /// Visits every item's transform without allocating.
    ///
    /// Call from your `on_change` handler and push each descriptor onto the
    /// corresponding realized element; the strip itself translates by
    /// [`offset`](Self::offset).
    pub fn for_each_transform(&self, mut f: impl FnMut(usize, ItemTransform)) {
        let Some(g) = &self.geometry else {
            return;
        };
        for index in 0..self.options.count {
            f(
                index,
                transform_for(index, self.offset, &g.bounds, self.options.angle, self.style),
            );
        }
    }

    /// Returns a serializable snapshot of the mutable engine state.
    pub fn state(&self) -> CoverflowState {
        CoverflowState {
            offset: self.offset,
            selected_index: self.selected_index,
            dragging: self.dragging,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// Fires `on_change` once; selection notifications are not replayed.
    pub fn restore_state(&mut self, state: CoverflowState) {
        self.batch_update(|c| {
            c.dragging = state.dragging;
            c.selected_index = state.selected_index;
            c.set_offset(state.offset);
            c.notify();
        });
    }
}

/// `floor` for the value range layouts produce, without requiring std float
/// intrinsics.
fn floor_to_i64(x: f32) -> i64 {
    let t = x as i64;
    if x < 0.0 && (t as f32) > x { t - 1 } else { t }
}

/// Rounds half toward positive infinity, matching the snap rule
/// `round(-offset / gap)`.
fn round_half_up(x: f32) -> i64 {
    floor_to_i64(x + 0.5)
}
