use crate::{Boundaries, TransformStyle};

/// Z translation of the centered item, pulling it toward the viewer.
pub const CENTER_DEPTH: f32 = 150.0;

/// Where an item sits relative to the centered window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Inside the centered window; this index is the selection candidate.
    Centered,
    /// Ahead of center (to the right of the selected item).
    Ahead,
    /// Behind center.
    Behind,
}

/// A per-item transform descriptor.
///
/// Hosts map this onto whatever their platform renders with, e.g.
/// `translate3d(x, y, z) rotateY(deg)` for DOM hosts. Purely derived state:
/// recompute it for every realized item whenever the offset or geometry
/// changes, never store it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation about the vertical axis, in degrees. `None` for the centered
    /// item and for everything in flat style.
    pub rotate_y: Option<f32>,
    pub placement: Placement,
}

impl ItemTransform {
    pub fn is_centered(&self) -> bool {
        matches!(self.placement, Placement::Centered)
    }
}

/// Maps an item index and the current strip offset to its transform.
///
/// With `x = index * gap` and `ix = x + offset`:
/// - `ix` in `[-threshold, threshold)` renders centered at depth
///   [`CENTER_DEPTH`]. The window is lower-inclusive so an item exactly half
///   a gap behind center still counts as centered.
/// - `ix > 0` renders ahead of center, pushed right by `delta` and rotated
///   `-angle` degrees in 3D style.
/// - otherwise behind center, pushed left and rotated `+angle`.
///
/// Not incremental: the result depends only on the arguments.
pub fn transform_for(
    index: usize,
    offset: f32,
    bounds: &Boundaries,
    angle: f32,
    style: TransformStyle,
) -> ItemTransform {
    let x = index as f32 * bounds.gap;
    let ix = x + offset;

    if ix >= -bounds.threshold && ix < bounds.threshold {
        ItemTransform {
            x,
            y: 0.0,
            z: CENTER_DEPTH,
            rotate_y: None,
            placement: Placement::Centered,
        }
    } else if ix > 0.0 {
        ItemTransform {
            x: x + bounds.delta,
            y: 0.0,
            z: 0.0,
            rotate_y: (!style.is_flat()).then_some(-angle),
            placement: Placement::Ahead,
        }
    } else {
        ItemTransform {
            x: x - bounds.delta,
            y: 0.0,
            z: 0.0,
            rotate_y: (!style.is_flat()).then_some(angle),
            placement: Placement::Behind,
        }
    }
}
