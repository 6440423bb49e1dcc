//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories use SeaORM entity models
//! internally and return domain models at the boundary, so database-specific
//! structures never leak into the service layer.

pub mod guild_level_settings;
pub mod member_activity;

#[cfg(test)]
mod test;
