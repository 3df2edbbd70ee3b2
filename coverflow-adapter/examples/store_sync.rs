// Example: keeping realized items in sync with collection updates.
use coverflow::{Coverflow, CoverflowOptions, ItemBox, ItemTransform, Orientation, Size};
use coverflow_adapter::{ItemContainer, RecordStore, on_store_update, refresh, selected_record};

struct LoggingContainer {
    realized: usize,
}

impl ItemContainer for LoggingContainer {
    type Record = String;

    fn len(&self) -> usize {
        self.realized
    }

    fn move_to_cache(&mut self, start: usize, end: usize) {
        println!("evict {start}..={end}");
    }

    fn move_from_cache(&mut self, records: &[String]) {
        println!("materialize {records:?}");
    }

    fn update_item(&mut self, index: usize, record: &String) {
        println!("rebind item {index} -> {record}");
    }

    fn set_item_box(&mut self, index: usize, outer: ItemBox, inner: Size) {
        println!(
            "size item {index}: outer {}x{}, inner {}x{}",
            outer.width, outer.height, inner.width, inner.height
        );
    }

    fn set_item_transform(&mut self, _index: usize, _transform: &ItemTransform) {}

    fn set_strip_offset(&mut self, offset: f32) {
        println!("strip -> {offset}");
    }

    fn set_orientation_marker(&mut self, orientation: Orientation) {
        println!("orientation -> {}", orientation.as_str());
    }
}

struct VecStore(Vec<String>);

impl RecordStore for VecStore {
    type Record = String;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> Option<&String> {
        self.0.get(index)
    }
}

fn main() {
    let store = VecStore(vec!["one".into(), "two".into(), "three".into()]);
    let mut cover = Coverflow::new(CoverflowOptions::new(store.len()));
    let mut container = LoggingContainer {
        realized: store.len(),
    };

    refresh(
        &mut cover,
        &mut container,
        Size::new(300.0, 500.0),
        Orientation::Portrait,
    );

    // An in-place edit: the element is rebound and resized, nothing moves.
    on_store_update(&cover, &mut container, &"two (edited)".to_string(), 1, None);

    // A move: the stale element is evicted and re-materialized.
    on_store_update(&cover, &mut container, &"three".to_string(), 0, Some(2));

    println!("selected record: {:?}", selected_record(&cover, &store));
}
