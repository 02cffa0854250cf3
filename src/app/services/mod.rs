//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Settings store (committed values, persistence, subscriptions)
//! - Project catalog CRUD
//! - Profile and showreel updates
//! - Admin auth marker
//! - Input validation

pub mod auth;
pub mod catalog;
pub mod profile;
pub mod store;
pub mod validation;
