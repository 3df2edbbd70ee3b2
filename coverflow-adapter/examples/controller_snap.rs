// Example: controller-driven gestures with an eased snap animation.
use coverflow::{CoverflowOptions, Orientation, Size};
use coverflow_adapter::Controller;

fn main() {
    let mut c = Controller::new(CoverflowOptions::new(8));
    c.cover_mut()
        .refresh(Size::new(640.0, 480.0), Orientation::Landscape);

    c.on_drag_start();
    c.on_drag(-90.0);
    c.on_drag(-35.0);
    let applied = c.on_drag_end(0);
    println!("released -> selected {applied:?}");

    // A host without CSS transitions samples the strip position each frame.
    for now_ms in [0u64, 100, 200, 300, 400, 500] {
        match c.tick(now_ms) {
            Some(offset) => println!("t={now_ms}ms offset={offset:.1}"),
            None => println!("t={now_ms}ms settled at {}", c.cover().offset()),
        }
    }

    // Programmatic selection gets the same eased travel as a tap.
    c.select(5, 600);
    println!(
        "selected {} (animating: {})",
        c.cover().selected_index(),
        c.is_animating()
    );
}
