use coverflow::{Coverflow, Orientation, Size};

use crate::ItemContainer;

/// Full layout pass: run on paint, resize, and orientation change.
///
/// Updates the host's orientation marker, recomputes the engine geometry
/// (which re-snaps the strip and may fire the selection notification), sizes
/// every realized item, and re-applies all transforms. Idempotent for an
/// unchanged container box and item count.
pub fn refresh<C: ItemContainer>(
    cover: &mut Coverflow,
    container: &mut C,
    container_box: Size,
    orientation: Orientation,
) {
    container.set_orientation_marker(orientation);
    cover.refresh(container_box, orientation);

    for index in 0..container.len() {
        resize_item(cover, container, index);
    }
    apply_transforms(cover, container);
}

/// Applies the current item box to one realized element.
///
/// The outer box is taller than the visible item (reflection headroom), so
/// the nested inner box is applied alongside it. No-op before the first
/// layout.
pub fn resize_item<C: ItemContainer>(cover: &Coverflow, container: &mut C, index: usize) {
    let Some(geometry) = cover.geometry() else {
        return;
    };
    let outer = geometry.item_box;
    container.set_item_box(index, outer, outer.inner());
}

/// Pushes the strip offset and every item transform onto the host.
///
/// Call this from the engine's `on_change` handler: transforms are derived
/// state and must be recomputed for every realized item whenever the offset
/// or geometry changes.
pub fn apply_transforms<C: ItemContainer>(cover: &Coverflow, container: &mut C) {
    container.set_strip_offset(cover.offset());
    for index in 0..container.len() {
        if let Some(transform) = cover.transform_for(index) {
            container.set_item_transform(index, &transform);
        }
    }
}
