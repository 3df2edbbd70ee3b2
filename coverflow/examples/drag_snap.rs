// Example: a full drag sequence with boundary damping and snap.
use coverflow::{Coverflow, CoverflowOptions, Orientation, Size};

fn main() {
    let mut cover = Coverflow::new(CoverflowOptions::new(5).with_on_selection_change(Some(
        |_: &Coverflow, index: usize| {
            println!("selection changed -> {index}");
        },
    )));
    cover.refresh(Size::new(300.0, 500.0), Orientation::Portrait);

    // Drag right past the first item: deltas are halved at the boundary.
    cover.drag_start();
    cover.drag_update(40.0);
    println!("damped offset={}", cover.offset());
    cover.drag_end();

    // Drag left across two and a half gaps and release.
    cover.drag_start();
    for _ in 0..5 {
        cover.drag_update(-26.0);
    }
    let applied = cover.drag_end();
    println!(
        "snapped to {:?} at offset {}",
        applied,
        cover.offset()
    );
}
