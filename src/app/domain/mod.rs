//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Design and animation settings domains
//! - Color presets
//! - Portfolio content (projects, profile, showreel)
//! - Notice types for transient user-facing messages

pub mod animation;
pub mod design;
pub mod messages;
pub mod preset;
pub mod project;

pub use animation::{AnimationPatch, AnimationSettings, BackgroundAnimation};
pub use design::{
    ColorPatch, ColorSettings, DesignPatch, DesignSettings, LayoutPatch, LayoutSettings,
    MediaPatch, MediaSettings, TypographyPatch, TypographySettings,
};
pub use messages::{Notice, NoticeKind};
pub use preset::ColorPreset;
pub use project::{
    ProfileData, ProfilePatch, Project, ProjectKind, ShowreelVideo, SocialLinks, SocialPatch,
    VideoSource,
};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// One independently configurable settings group ("design" or "animation").
///
/// A domain is a concrete record with hard-coded defaults, a storage key,
/// and a per-section patch type, so that partial updates are type-checked
/// and default-filling is exhaustive.
pub trait SettingsDomain: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Key of this domain's record in the durable store.
    const STORAGE_KEY: &'static str;

    /// Partial update applied by [`merge`](Self::merge).
    type Patch: Clone;

    /// The hard-coded default configuration.
    fn defaults() -> Self;

    /// Merge a patch onto this value. Fields absent from the patch keep
    /// their current value; updating one field never erases its siblings.
    fn merge(&mut self, patch: Self::Patch);

    /// A patch that reproduces this entire value when merged onto any base.
    fn to_patch(&self) -> Self::Patch;
}
