//! Reelfolio is the state engine behind a video editor's portfolio site:
//! typed settings domains (design, animation) edited through a
//! draft-vs-committed model, portfolio content (profile, showreel, project
//! galleries), and a 24-hour admin auth marker, all mirrored to a durable
//! key/value store.
//!
//! The visual layer is not part of this crate. Rendering is reached only
//! through [`app::RenderSurface`], and persistence only through
//! [`app::Storage`], so the engine runs the same against a real page, a
//! desktop shell, or the in-memory test doubles shipped here.

pub mod app;

pub use app::{AdminState, AppError, Result};
