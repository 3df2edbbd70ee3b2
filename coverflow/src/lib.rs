//! A headless coverflow engine for gesture-driven carousels.
//!
//! For adapter-level utilities (snap transitions, collaborator sync), see the
//! `coverflow-adapter` crate.
//!
//! This crate focuses on the core math and state behind a coverflow widget:
//! mapping a continuous drag offset to per-item 3D (or flat) transforms,
//! snapping to a selected index, and keeping selection consistent across
//! drag, tap, resize, and data-mutation events.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the container box (and orientation) on paint and resize
//! - drag start/update/end events with horizontal deltas
//! - style application for the transform descriptors the engine computes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cover;
mod geometry;
mod options;
mod state;
mod transform;
mod types;

#[cfg(test)]
mod tests;

pub use cover::{BASE_CLASS, Coverflow, ITEM_BASE_CLASS};
pub use geometry::{
    Boundaries, Geometry, ITEM_TOP, ItemBox, NARROW_SIZE_FACTOR, OUTER_HEIGHT_RATIO,
    WIDE_SIZE_FACTOR, base_item_box, boundaries,
};
pub use options::{
    CoverflowOptions, DEFAULT_ANGLE, OnChangeCallback, OnSelectionChangeCallback,
};
pub use state::CoverflowState;
pub use transform::{CENTER_DEPTH, ItemTransform, Placement, transform_for};
pub use types::{Orientation, PlatformProfile, Size, TransformStyle};
