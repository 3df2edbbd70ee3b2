/// A lightweight, serializable snapshot of the engine's mutable state.
///
/// Geometry is deliberately absent: it is derived, and a restore is expected
/// to be followed by a refresh against the current container box.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverflowState {
    pub offset: f32,
    pub selected_index: usize,
    pub dragging: bool,
}
