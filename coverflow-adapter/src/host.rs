use coverflow::{Coverflow, ItemBox, ItemTransform, Orientation, Size};

/// Host-side container of realized item elements.
///
/// This mirrors the primitives a data-bound list container exposes: cache
/// eviction/insertion for moves, in-place content updates, and per-element
/// style application. The adapter never touches elements directly; it drives
/// these methods.
pub trait ItemContainer {
    type Record;

    /// Number of realized item elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evicts the realized items in `start..=end` into the element cache.
    fn move_to_cache(&mut self, start: usize, end: usize);

    /// Re-materializes elements for `records` at their current indexes.
    fn move_from_cache(&mut self, records: &[Self::Record]);

    /// Rebinds the element at `index` to `record`, bypassing record identity
    /// checks (the same record may arrive carrying changed data).
    fn update_item(&mut self, index: usize, record: &Self::Record);

    /// Applies the outer item box and the nested inner content box.
    fn set_item_box(&mut self, index: usize, outer: ItemBox, inner: Size);

    fn set_item_transform(&mut self, index: usize, transform: &ItemTransform);

    /// Translates the strip element as a whole.
    fn set_strip_offset(&mut self, offset: f32);

    /// Swaps the orientation marker class on the root element (see
    /// [`Coverflow::orientation_class`]).
    fn set_orientation_marker(&mut self, orientation: Orientation);
}

/// The bound data collection.
pub trait RecordStore {
    type Record;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Record>;
}

/// Resolves the record behind the current selection.
///
/// Pair this with the engine's selection notification to deliver the
/// record-carrying event the host API promises.
pub fn selected_record<'a, S: RecordStore>(
    cover: &Coverflow,
    store: &'a S,
) -> Option<&'a S::Record> {
    store.get(cover.selected_index())
}
