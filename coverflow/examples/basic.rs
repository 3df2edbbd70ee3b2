// Example: minimal usage and programmatic selection.
use coverflow::{Coverflow, CoverflowOptions, Orientation, Size};

fn main() {
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_selected_index(2));
    cover.refresh(Size::new(300.0, 500.0), Orientation::Portrait);

    let geometry = cover.geometry().unwrap();
    println!("item_box={:?}", geometry.item_box);
    println!("bounds={:?}", geometry.bounds);

    cover.for_each_transform(|index, t| {
        println!("item {index}: {t:?}");
    });

    cover.set_selected_index(4);
    println!(
        "selected={} offset={}",
        cover.selected_index(),
        cover.offset()
    );
}
