use coverflow::{Coverflow, CoverflowOptions, Orientation, Size};

use crate::{Easing, SNAP_DURATION_MS, SnapTransition};

/// A framework-neutral controller that wraps a [`Coverflow`] engine and
/// provides the common adapter workflows: gesture entry points and the
/// snap-transition animation a CSS host would otherwise get from a 0.4 s
/// transition.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag_start` / `on_drag` / `on_drag_end` / `on_item_tap` when
///   gesture events occur
/// - `on_resize` / `on_orientation_change` when the viewport changes
/// - `tick(now_ms)` each frame while a snap transition runs
///
/// The engine state snaps instantly on release (selection is correct
/// immediately); `tick`/`visual_offset` give hosts without native easing the
/// animated strip position to paint.
#[derive(Clone, Debug)]
pub struct Controller {
    cover: Coverflow,
    snap: Option<SnapTransition>,
    easing: Easing,
    snap_duration_ms: u64,
}

impl Controller {
    pub fn new(options: CoverflowOptions) -> Self {
        Self::from_cover(Coverflow::new(options))
    }

    pub fn from_cover(cover: Coverflow) -> Self {
        Self {
            cover,
            snap: None,
            easing: Easing::EaseOutCubic,
            snap_duration_ms: SNAP_DURATION_MS,
        }
    }

    pub fn cover(&self) -> &Coverflow {
        &self.cover
    }

    pub fn cover_mut(&mut self) -> &mut Coverflow {
        &mut self.cover
    }

    pub fn into_cover(self) -> Coverflow {
        self.cover
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn set_snap_duration_ms(&mut self, duration_ms: u64) {
        self.snap_duration_ms = duration_ms;
    }

    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.snap = None;
    }

    /// Call when a pointer sequence begins. The strip must follow the
    /// pointer instantly, so any running snap transition is cancelled.
    pub fn on_drag_start(&mut self) {
        self.cancel_animation();
        self.cover.drag_start();
    }

    /// Call for each drag event with its horizontal delta.
    pub fn on_drag(&mut self, delta_x: f32) {
        self.cover.drag_update(delta_x);
    }

    /// Call when the pointer sequence ends.
    ///
    /// Snaps the engine to the nearest index and starts the eased strip
    /// animation toward it. Returns the applied index.
    pub fn on_drag_end(&mut self, now_ms: u64) -> Option<usize> {
        let from = self.visual_offset(now_ms);
        let applied = self.cover.drag_end();
        if applied.is_some() {
            self.begin_snap(from, now_ms);
        }
        applied
    }

    /// Consumes an item tap. Returns whether a selection was applied (taps
    /// on the current selection, or with tap-selection suppressed, do
    /// nothing).
    pub fn on_item_tap(&mut self, index: usize, now_ms: u64) -> bool {
        let from = self.visual_offset(now_ms);
        if !self.cover.tap(index) {
            return false;
        }
        self.begin_snap(from, now_ms);
        true
    }

    /// Programmatic selection with the same eased travel as a tap.
    pub fn select(&mut self, index: usize, now_ms: u64) {
        let from = self.visual_offset(now_ms);
        self.cover.set_selected_index(index);
        self.begin_snap(from, now_ms);
    }

    /// Call when the container box changes.
    pub fn on_resize(&mut self, container_box: Size, orientation: Orientation) {
        self.cancel_animation();
        self.cover.refresh(container_box, orientation);
    }

    /// Call from the viewport's orientation-change subscription.
    ///
    /// Honors `prevent_orientation_change`: returns `false` without
    /// re-laying-out when the widget opted out.
    pub fn on_orientation_change(&mut self, container_box: Size, orientation: Orientation) -> bool {
        if self.cover.options().prevent_orientation_change {
            return false;
        }
        self.on_resize(container_box, orientation);
        true
    }

    fn begin_snap(&mut self, from: f32, now_ms: u64) {
        let to = self.cover.offset();
        if from == to {
            self.snap = None;
            return;
        }
        self.snap = Some(SnapTransition::new(
            from,
            to,
            now_ms,
            self.snap_duration_ms,
            self.easing,
        ));
    }

    /// Advances the snap transition.
    ///
    /// Returns the strip offset to paint this frame, or `None` when no
    /// animation is running (paint [`Coverflow::offset`] directly).
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let snap = self.snap?;
        if snap.is_done(now_ms) {
            self.snap = None;
            return Some(snap.to);
        }
        Some(snap.sample(now_ms))
    }

    /// The strip offset as currently visible: the transition sample while
    /// animating, the engine offset otherwise.
    pub fn visual_offset(&self, now_ms: u64) -> f32 {
        match &self.snap {
            Some(snap) => snap.sample(now_ms),
            None => self.cover.offset(),
        }
    }
}
