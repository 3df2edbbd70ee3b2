use alloc::string::String;
use alloc::sync::Arc;

use crate::PlatformProfile;
use crate::cover::Coverflow;

/// Default rotation of off-center items, in degrees.
pub const DEFAULT_ANGLE: f32 = 70.0;

/// A callback fired after every engine state change.
///
/// The second argument is whether a drag is in progress. This is the hook a
/// host uses to re-apply the strip offset and item transforms; one gesture
/// step or batched update produces exactly one call.
pub type OnChangeCallback = Arc<dyn Fn(&Coverflow, bool) + Send + Sync>;

/// A callback fired when the applied selection changes.
///
/// Receives the newly selected index; resolve the underlying record through
/// your data collection (see `selected_record` in the adapter crate).
pub type OnSelectionChangeCallback = Arc<dyn Fn(&Coverflow, usize) + Send + Sync>;

/// Configuration for [`crate::Coverflow`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct CoverflowOptions {
    /// Number of items in the bound collection.
    pub count: usize,
    /// The index active first. Held as a pending value until the first
    /// refresh renders it.
    pub selected_index: usize,
    /// Extra class name hosts add to each item wrapper element
    /// (see [`Coverflow::item_wrap_class`]).
    pub item_class: Option<String>,
    /// Suppresses tap-to-select.
    pub prevent_selection_on_item_tap: bool,
    /// Rotation of off-center items in 3D style, in degrees.
    pub angle: f32,
    /// Requests the flat (no rotation) rendering variant. The platform
    /// profile can force this on regardless.
    pub flat: bool,
    /// Tells hosts not to wire the orientation-change subscription; no
    /// automatic re-layout happens on device rotation.
    pub prevent_orientation_change: bool,
    /// Host platform capabilities, read once when options are applied.
    pub platform: PlatformProfile,
    /// Optional state-change callback.
    pub on_change: Option<OnChangeCallback>,
    /// Optional selection-change callback.
    pub on_selection_change: Option<OnSelectionChangeCallback>,
}

impl CoverflowOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selected_index: 0,
            item_class: None,
            prevent_selection_on_item_tap: false,
            angle: DEFAULT_ANGLE,
            flat: false,
            prevent_orientation_change: false,
            platform: PlatformProfile::generic(),
            on_change: None,
            on_selection_change: None,
        }
    }

    pub fn with_selected_index(mut self, selected_index: usize) -> Self {
        self.selected_index = selected_index;
        self
    }

    pub fn with_item_class(mut self, item_class: impl Into<String>) -> Self {
        self.item_class = Some(item_class.into());
        self
    }

    pub fn with_prevent_selection_on_item_tap(mut self, prevent: bool) -> Self {
        self.prevent_selection_on_item_tap = prevent;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn with_prevent_orientation_change(mut self, prevent: bool) -> Self {
        self.prevent_orientation_change = prevent;
        self
    }

    pub fn with_platform(mut self, platform: PlatformProfile) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Coverflow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_selection_change(
        mut self,
        on_selection_change: Option<impl Fn(&Coverflow, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_selection_change = on_selection_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for CoverflowOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            selected_index: self.selected_index,
            item_class: self.item_class.clone(),
            prevent_selection_on_item_tap: self.prevent_selection_on_item_tap,
            angle: self.angle,
            flat: self.flat,
            prevent_orientation_change: self.prevent_orientation_change,
            platform: self.platform,
            on_change: self.on_change.clone(),
            on_selection_change: self.on_selection_change.clone(),
        }
    }
}

impl core::fmt::Debug for CoverflowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoverflowOptions")
            .field("count", &self.count)
            .field("selected_index", &self.selected_index)
            .field("item_class", &self.item_class)
            .field(
                "prevent_selection_on_item_tap",
                &self.prevent_selection_on_item_tap,
            )
            .field("angle", &self.angle)
            .field("flat", &self.flat)
            .field(
                "prevent_orientation_change",
                &self.prevent_orientation_change,
            )
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}
