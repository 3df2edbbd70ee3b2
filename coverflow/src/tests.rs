use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_range_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() % 10_000) as f32 / 10_000.0;
        start + (end - start) * unit
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= 1e-3,
        "expected {expected}, got {actual}"
    );
}

const PORTRAIT: Size = Size {
    width: 300.0,
    height: 500.0,
};

fn rendered_cover(count: usize) -> Coverflow {
    let mut cover = Coverflow::new(CoverflowOptions::new(count));
    cover.refresh(PORTRAIT, Orientation::Portrait);
    cover
}

#[test]
fn portrait_item_box_and_boundaries() {
    let item_box = base_item_box(PORTRAIT);
    assert_close(item_box.top, 40.0);
    assert_close(item_box.width, 156.0);
    assert_close(item_box.height, 234.0);
    assert_close(item_box.left, 72.0);

    let b = boundaries(&item_box, TransformStyle::ThreeD);
    assert_close(b.gap, 52.0);
    assert_close(b.threshold, 26.0);
    assert_close(b.delta, 62.4);

    let inner = item_box.inner();
    assert_close(inner.width, 156.0);
    assert_close(inner.height, 156.0);
}

#[test]
fn flat_boundaries_spread_wider() {
    let item_box = base_item_box(PORTRAIT);
    let b = boundaries(&item_box, TransformStyle::Flat);
    assert_close(b.gap, 171.6);
    assert_close(b.threshold, 57.2);
    assert_close(b.delta, 31.2);
}

#[test]
fn landscape_container_uses_wide_factor() {
    let item_box = base_item_box(Size::new(500.0, 300.0));
    assert_close(item_box.width, 204.0); // 300 * 0.68
    assert_close(item_box.left, 148.0);
}

#[test]
fn transform_branches_in_3d() {
    let b = Boundaries {
        gap: 52.0,
        threshold: 26.0,
        delta: 62.4,
    };

    let centered = transform_for(0, 0.0, &b, 70.0, TransformStyle::ThreeD);
    assert_eq!(centered.placement, Placement::Centered);
    assert_close(centered.x, 0.0);
    assert_close(centered.z, CENTER_DEPTH);
    assert_eq!(centered.rotate_y, None);

    let ahead = transform_for(2, 0.0, &b, 70.0, TransformStyle::ThreeD);
    assert_eq!(ahead.placement, Placement::Ahead);
    assert_close(ahead.x, 104.0 + 62.4);
    assert_close(ahead.z, 0.0);
    assert_eq!(ahead.rotate_y, Some(-70.0));

    let behind = transform_for(0, -104.0, &b, 70.0, TransformStyle::ThreeD);
    assert_eq!(behind.placement, Placement::Behind);
    assert_close(behind.x, -62.4);
    assert_eq!(behind.rotate_y, Some(70.0));
}

#[test]
fn flat_style_never_rotates() {
    let b = Boundaries {
        gap: 57.2,
        threshold: 19.0,
        delta: 31.2,
    };
    for index in 0..5 {
        let t = transform_for(index, -120.0, &b, 70.0, TransformStyle::Flat);
        assert_eq!(t.rotate_y, None);
    }
}

#[test]
fn platform_profile_forces_flat() {
    let cover = Coverflow::new(
        CoverflowOptions::new(3).with_platform(PlatformProfile::android()),
    );
    assert_eq!(cover.style(), TransformStyle::Flat);

    let cover = Coverflow::new(CoverflowOptions::new(3));
    assert_eq!(cover.style(), TransformStyle::ThreeD);
}

#[test]
fn selected_index_round_trips_when_rendered() {
    let mut cover = rendered_cover(5);
    for i in 0..5 {
        cover.set_selected_index(i);
        assert_eq!(cover.selected_index(), i);
        let gap = cover.geometry().unwrap().bounds.gap;
        assert_close(cover.offset(), -(i as f32) * gap);
    }
}

#[test]
fn selection_is_pending_before_first_layout() {
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_selected_index(2));
    assert!(!cover.rendered());
    assert_eq!(cover.selected_index(), 2);

    // Pending values are stored raw and only clamped on render.
    cover.set_selected_index(9);
    assert_eq!(cover.selected_index(), 9);

    cover.refresh(PORTRAIT, Orientation::Portrait);
    assert_eq!(cover.selected_index(), 4);
}

#[test]
fn out_of_range_programmatic_index_clamps() {
    let mut cover = rendered_cover(5);
    cover.set_selected_index(42);
    assert_eq!(cover.selected_index(), 4);
}

#[test]
fn drag_snaps_to_nearest_index_and_fires_selection() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);
    let mut cover = Coverflow::new(
        CoverflowOptions::new(5)
            .with_selected_index(2)
            .with_on_selection_change(Some(move |_: &Coverflow, index: usize| {
                sink.lock().unwrap().push(index);
            })),
    );
    cover.refresh(PORTRAIT, Orientation::Portrait);
    assert_eq!(fired.lock().unwrap().as_slice(), &[2]);

    // Net drag to offset -130 with gap 52: round(130 / 52) = 3.
    cover.drag_start();
    cover.drag_update(-26.0);
    assert_close(cover.offset(), -130.0);

    let applied = cover.drag_end();
    assert_eq!(applied, Some(3));
    assert_eq!(cover.selected_index(), 3);
    assert_close(cover.offset(), -156.0);
    assert_eq!(fired.lock().unwrap().as_slice(), &[2, 3]);
}

#[test]
fn boundary_damping_halves_outward_deltas() {
    let mut cover = rendered_cover(5);

    // At the first item, dragging further right is damped.
    cover.drag_start();
    cover.drag_update(40.0);
    assert_close(cover.offset(), 20.0);
    cover.drag_end();

    // Interior drags are undamped.
    cover.set_selected_index(2);
    let before = cover.offset();
    cover.drag_start();
    cover.drag_update(30.0);
    assert_close(cover.offset(), before + 30.0);
    cover.drag_end();

    // Symmetric at the last item.
    cover.set_selected_index(4);
    let before = cover.offset();
    cover.drag_start();
    cover.drag_update(-40.0);
    assert_close(cover.offset(), before - 20.0);
}

#[test]
fn drag_update_outside_a_drag_is_ignored() {
    let mut cover = rendered_cover(5);
    let before = cover.offset();
    cover.drag_update(100.0);
    assert_close(cover.offset(), before);
    assert_eq!(cover.drag_end(), None);
}

#[test]
fn tap_selects_unless_prevented_or_redundant() {
    let fired = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&fired);
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_on_selection_change(Some(
        move |_: &Coverflow, _| {
            sink.fetch_add(1, Ordering::SeqCst);
        },
    )));
    cover.refresh(PORTRAIT, Orientation::Portrait);
    let after_refresh = fired.load(Ordering::SeqCst);

    assert!(cover.tap(3));
    assert_eq!(cover.selected_index(), 3);
    assert_eq!(fired.load(Ordering::SeqCst), after_refresh + 1);

    // Tapping the current selection does nothing.
    assert!(!cover.tap(3));
    assert_eq!(fired.load(Ordering::SeqCst), after_refresh + 1);
}

#[test]
fn prevented_tap_changes_nothing() {
    let fired = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&fired);
    let mut cover = Coverflow::new(
        CoverflowOptions::new(5)
            .with_selected_index(2)
            .with_prevent_selection_on_item_tap(true)
            .with_on_selection_change(Some(move |_: &Coverflow, _| {
                sink.fetch_add(1, Ordering::SeqCst);
            })),
    );
    cover.refresh(PORTRAIT, Orientation::Portrait);
    let after_refresh = fired.load(Ordering::SeqCst);

    assert!(!cover.tap(0));
    assert_eq!(cover.selected_index(), 2);
    assert_eq!(fired.load(Ordering::SeqCst), after_refresh);
}

#[test]
fn refresh_is_idempotent_for_unchanged_box() {
    let mut cover = rendered_cover(5);
    cover.set_selected_index(2);

    let mut first = Vec::new();
    cover.for_each_transform(|i, t| first.push((i, t)));

    cover.refresh(PORTRAIT, Orientation::Portrait);
    let mut second = Vec::new();
    cover.for_each_transform(|i, t| second.push((i, t)));

    assert_eq!(first, second);
}

#[test]
fn selection_event_dedupes_repeats() {
    let fired = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&fired);
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_on_selection_change(Some(
        move |_: &Coverflow, _| {
            sink.fetch_add(1, Ordering::SeqCst);
        },
    )));
    cover.refresh(PORTRAIT, Orientation::Portrait);
    let baseline = fired.load(Ordering::SeqCst);
    assert_eq!(baseline, 1); // initial selection

    cover.set_selected_index(2);
    cover.set_selected_index(2);
    cover.refresh(PORTRAIT, Orientation::Portrait);
    assert_eq!(fired.load(Ordering::SeqCst), baseline + 1);
}

#[test]
fn empty_collection_is_a_no_op_until_items_exist() {
    let mut cover = Coverflow::new(CoverflowOptions::new(0));
    cover.refresh(PORTRAIT, Orientation::Portrait);

    assert_eq!(cover.selected_index(), 0);
    cover.set_selected_index(3);
    assert_eq!(cover.selected_index(), 0);

    cover.drag_start();
    cover.drag_update(-50.0);
    assert_eq!(cover.drag_end(), None);

    cover.set_count(4);
    cover.refresh(PORTRAIT, Orientation::Portrait);
    assert_eq!(cover.selected_index(), 0);
    assert!(cover.transform_for(3).is_some());
}

#[test]
fn degenerate_container_disables_offset_selection() {
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_selected_index(2));
    cover.refresh(Size::new(0.0, 0.0), Orientation::Portrait);

    assert!(cover.rendered());
    assert!(!cover.geometry().unwrap().bounds.has_valid_gap());
    // The stored value answers; nothing divides by the zero gap.
    assert_eq!(cover.selected_index(), 2);
    assert_close(cover.offset(), 0.0);

    cover.drag_start();
    cover.drag_update(-30.0);
    assert_eq!(cover.drag_end(), None);
}

#[test]
fn non_finite_input_is_rejected() {
    let mut cover = rendered_cover(5);
    cover.set_selected_index(1);
    let before = cover.offset();

    cover.set_offset(f32::NAN);
    assert_close(cover.offset(), before);

    cover.drag_start();
    cover.drag_update(f32::INFINITY);
    assert_close(cover.offset(), before);
    cover.drag_end();
}

#[test]
fn set_count_clamps_selection_and_realigns() {
    let mut cover = rendered_cover(5);
    cover.set_selected_index(4);

    cover.set_count(3);
    assert_eq!(cover.selected_index(), 2);
    let gap = cover.geometry().unwrap().bounds.gap;
    assert_close(cover.offset(), -2.0 * gap);

    cover.set_count(0);
    assert_eq!(cover.selected_index(), 0);
}

#[test]
fn on_change_fires_once_per_gesture_step() {
    let changes = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&changes);
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_on_change(Some(
        move |_: &Coverflow, _| {
            sink.fetch_add(1, Ordering::SeqCst);
        },
    )));
    cover.refresh(PORTRAIT, Orientation::Portrait);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    cover.drag_start();
    assert_eq!(changes.load(Ordering::SeqCst), 2);
    cover.drag_update(-10.0);
    assert_eq!(changes.load(Ordering::SeqCst), 3);
    cover.drag_end();
    assert_eq!(changes.load(Ordering::SeqCst), 4);
}

#[test]
fn on_change_reports_drag_state() {
    let during = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&during);
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_on_change(Some(
        move |_: &Coverflow, dragging: bool| {
            if dragging {
                sink.fetch_add(1, Ordering::SeqCst);
            }
        },
    )));
    cover.refresh(PORTRAIT, Orientation::Portrait);

    cover.drag_start();
    cover.drag_update(-10.0);
    assert_eq!(during.load(Ordering::SeqCst), 2);
    cover.drag_end();
    assert_eq!(during.load(Ordering::SeqCst), 2);
    assert!(!cover.is_dragging());
}

#[test]
fn orientation_and_class_helpers() {
    let mut cover = Coverflow::new(CoverflowOptions::new(3).with_item_class("album"));
    assert_eq!(cover.orientation_class(), None);

    cover.refresh(Size::new(500.0, 300.0), Orientation::Landscape);
    assert_eq!(cover.orientation(), Some(Orientation::Landscape));
    assert_eq!(cover.orientation_class().as_deref(), Some("coverflow-landscape"));
    assert_eq!(cover.item_wrap_class().as_deref(), Some("album-wrap"));
    assert_eq!(Orientation::of(PORTRAIT), Orientation::Portrait);
}

#[test]
fn transform_for_bounds() {
    let cover = Coverflow::new(CoverflowOptions::new(3));
    assert!(cover.transform_for(0).is_none()); // not rendered

    let cover = rendered_cover(3);
    assert!(cover.transform_for(2).is_some());
    assert!(cover.transform_for(3).is_none());
}

#[test]
fn state_snapshot_round_trips() {
    let mut cover = rendered_cover(5);
    cover.set_selected_index(3);
    cover.drag_start();
    cover.drag_update(-12.0);
    let snapshot = cover.state();

    let mut other = rendered_cover(5);
    other.restore_state(snapshot);
    assert_eq!(other.state(), snapshot);
    assert_close(other.offset(), cover.offset());
}

#[test]
fn offsets_near_snap_points_center_exactly_one_item() {
    let mut cover = rendered_cover(7);
    let b = cover.geometry().unwrap().bounds;

    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let index = rng.gen_range_usize(0, 7);
        let jitter = rng.gen_range_f32(-b.threshold * 0.95, b.threshold * 0.95);
        cover.set_offset(-(index as f32) * b.gap + jitter);

        let mut centered = Vec::new();
        cover.for_each_transform(|i, t| {
            if t.is_centered() {
                centered.push(i);
            }
        });
        assert_eq!(centered.as_slice(), &[index]);
    }
}

#[test]
fn random_gestures_always_snap_to_a_valid_index() {
    let mut rng = Lcg::new(42);

    for _ in 0..100 {
        let count = rng.gen_range_usize(1, 12);
        let container = Size::new(
            rng.gen_range_f32(50.0, 800.0),
            rng.gen_range_f32(50.0, 800.0),
        );
        let mut cover = Coverflow::new(CoverflowOptions::new(count).with_flat(rng.gen_bool()));
        cover.refresh(container, Orientation::of(container));
        let gap = cover.geometry().unwrap().bounds.gap;

        cover.drag_start();
        for _ in 0..rng.gen_range_usize(1, 6) {
            cover.drag_update(rng.gen_range_f32(-300.0, 300.0));
        }
        let applied = cover.drag_end().unwrap();

        assert!(applied < count);
        assert_eq!(cover.selected_index(), applied);
        assert_close(cover.offset(), -(applied as f32) * gap);

        // Never more than one centered item, whatever the offset.
        let mut centered = 0;
        cover.for_each_transform(|_, t| {
            if t.is_centered() {
                centered += 1;
            }
        });
        assert!(centered <= 1);
    }
}
