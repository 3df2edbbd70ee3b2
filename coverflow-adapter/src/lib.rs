//! Adapter utilities for the `coverflow` crate.
//!
//! The `coverflow` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A [`Controller`] wrapping the engine with snap-transition animation
//!   (standing in for the CSS ease a DOM host would get for free)
//! - Collaborator traits for the host's item container and data collection
//! - The refresh/layout orchestration and store-update sync flows
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod host;
mod refresh;
mod sync;
mod transition;


pub use controller::Controller;
pub use host::{ItemContainer, RecordStore, selected_record};
pub use refresh::{apply_transforms, refresh, resize_item};
pub use sync::on_store_update;
pub use transition::{Easing, SNAP_DURATION_MS, SnapTransition};
