use coverflow::Coverflow;

use crate::{ItemContainer, resize_item};

/// Reconciles a collection update notification with the realized items.
///
/// `old_index` of `None` means a pure in-place update. A changed index is a
/// move: the stale element is evicted into the cache and a fresh one is
/// materialized for the record. Otherwise the existing element is rebound in
/// place and resized to the current item box.
pub fn on_store_update<C: ItemContainer>(
    cover: &Coverflow,
    container: &mut C,
    record: &C::Record,
    new_index: usize,
    old_index: Option<usize>,
) {
    let old_index = old_index.unwrap_or(new_index);

    if old_index != new_index {
        container.move_to_cache(old_index, old_index);
        container.move_from_cache(core::slice::from_ref(record));
    } else {
        container.update_item(new_index, record);
        resize_item(cover, container, new_index);
    }
}
