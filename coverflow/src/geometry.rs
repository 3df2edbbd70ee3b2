use crate::{Size, TransformStyle};

/// How much taller the outer item box is than the visible item.
///
/// The extra height keeps a reflection below the item from painting over its
/// neighbors; hosts wrap the visible content in an inner element sized via
/// [`ItemBox::inner`].
pub const OUTER_HEIGHT_RATIO: f32 = 1.5;

/// Item size factor for containers wider than tall.
pub const WIDE_SIZE_FACTOR: f32 = 0.68;
/// Item size factor for portrait-ish containers.
pub const NARROW_SIZE_FACTOR: f32 = 0.52;

/// Fixed top offset of every item box, in layout units.
pub const ITEM_TOP: f32 = 40.0;

/// The box applied to each realized item element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBox {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ItemBox {
    /// The nested inner box holding the visible item content.
    ///
    /// Undoes the [`OUTER_HEIGHT_RATIO`] compensation of the outer box.
    pub fn inner(&self) -> Size {
        Size {
            width: self.width,
            height: self.height / OUTER_HEIGHT_RATIO,
        }
    }
}

/// Spacing constants derived from the item box and transform style.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundaries {
    /// Distance between adjacent item anchor positions.
    pub gap: f32,
    /// Half-width of the window around a snap point within which an item
    /// counts as centered.
    pub threshold: f32,
    /// Extra lateral displacement pushed onto non-centered items.
    pub delta: f32,
}

impl Boundaries {
    /// Whether the gap can safely divide an offset.
    ///
    /// A zero or non-finite gap would make offset → index mapping ill-defined;
    /// callers treat it as "no valid selection".
    pub fn has_valid_gap(&self) -> bool {
        self.gap.is_finite() && self.gap > 0.0
    }
}

/// Everything the transform strategy needs about the current layout.
///
/// Recomputed wholesale on every refresh; never mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_box: ItemBox,
    pub bounds: Boundaries,
}

impl Geometry {
    pub fn compute(container: Size, style: TransformStyle) -> Self {
        let item_box = base_item_box(container);
        Self {
            bounds: boundaries(&item_box, style),
            item_box,
        }
    }
}

/// Chooses the item box for a container.
///
/// The base edge is `min(width, height)` scaled by an aspect-dependent
/// factor; the box is centered horizontally at a fixed top offset.
pub fn base_item_box(container: Size) -> ItemBox {
    let factor = if container.width > container.height {
        WIDE_SIZE_FACTOR
    } else {
        NARROW_SIZE_FACTOR
    };
    let w = container.width.min(container.height) * factor;

    ItemBox {
        top: ITEM_TOP,
        height: w * OUTER_HEIGHT_RATIO,
        width: w,
        left: (container.width - w) / 2.0,
    }
}

/// Derives the spacing constants for an item box.
///
/// Flat rendering spreads items wider than their own width (no rotation
/// narrows them), so it uses a larger gap with a tighter centered window.
pub fn boundaries(item_box: &ItemBox, style: TransformStyle) -> Boundaries {
    let w = item_box.width;
    if style.is_flat() {
        let gap = w * 1.1;
        Boundaries {
            gap,
            threshold: gap / 3.0,
            delta: w * 0.2,
        }
    } else {
        let gap = w / 3.0;
        Boundaries {
            gap,
            threshold: gap / 2.0,
            delta: w * 0.4,
        }
    }
}
