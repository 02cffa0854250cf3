//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (settings domains, projects, presets, notices)
//! - `controllers/` - Editing orchestration (DraftEditor)
//! - `services/` - Business operations (settings store, catalog, profile, auth, validation)
//! - `infrastructure/` - External integrations (storage, render surface, error)
//! - `state.rs` - Admin session coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::draft::DraftEditor;
pub use domain::{
    AnimationSettings, BackgroundAnimation, ColorPreset, ColorSettings, DesignSettings, Notice,
    NoticeKind, ProfileData, Project, ProjectKind, SettingsDomain, ShowreelVideo, SocialLinks,
    VideoSource,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::storage::{FileStorage, MemoryStorage, Storage};
pub use infrastructure::surface::{RenderSurface, StyleRegistry};
pub use services::catalog::{NewProject, ProjectCatalog};
pub use services::store::{SettingsStore, Subscription};
pub use state::AdminState;
