//! Domain models for the leveling engine.
//!
//! Models in this module are the types the service layer works with. Entity
//! models from the database are converted into these at the repository
//! boundary, so database-specific structures never leak into business logic.

pub mod level;
pub mod level_settings;
pub mod member_activity;
