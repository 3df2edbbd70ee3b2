/// A container or element size in layout units.
///
/// This is a platform-agnostic box where `width`/`height` are whatever units
/// your UI layer measures in (CSS pixels for DOM hosts, cells for TUIs).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Viewport orientation as reported by the host's viewport abstraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derives an orientation from a container box, for hosts without a
    /// dedicated orientation source.
    pub fn of(container: Size) -> Self {
        if container.width > container.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Which transform variant the engine renders with.
///
/// Resolved once at construction (see [`crate::PlatformProfile`]) and fixed
/// for the engine's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformStyle {
    /// Perspective coverflow: off-center items rotate about the Y axis.
    ThreeD,
    /// Lateral-translation-only rendering, for hosts without usable 3D
    /// transforms.
    Flat,
}

impl TransformStyle {
    /// Resolves the effective style from the configured `flat` flag and the
    /// injected platform capabilities.
    pub fn resolve(flat: bool, platform: PlatformProfile) -> Self {
        if flat || platform.force_flat {
            Self::Flat
        } else {
            Self::ThreeD
        }
    }

    pub fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }
}

/// Rendering capabilities of the host platform, injected at construction.
///
/// The engine reads this exactly once, when options are applied; platform
/// sniffing never happens at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformProfile {
    /// Forces [`TransformStyle::Flat`] regardless of the configured `flat`
    /// flag. Historically needed on the Android browser family, whose 3D
    /// transform support was too broken for the rotated variant.
    pub force_flat: bool,
}

impl PlatformProfile {
    pub fn generic() -> Self {
        Self { force_flat: false }
    }

    pub fn android() -> Self {
        Self { force_flat: true }
    }
}
