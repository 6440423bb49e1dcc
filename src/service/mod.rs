//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data layer. They
//! work with domain models rather than entity models, own the leveling rules,
//! and coordinate repository calls with Discord API operations.

pub mod level_settings;
pub mod leveling;
