//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Each entity has its own
//! factory module with both a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let settings = factory::create_guild_settings(&db).await?;
//!     let activity = factory::create_member_activity(&db, 123, 456).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use serde_json::json;
//! use test_utils::factory;
//!
//! let settings = factory::guild_level_settings::GuildLevelSettingsFactory::new(&db)
//!     .guild_id("987654321")
//!     .enabled(false)
//!     .build()
//!     .await?;
//!
//! let activity = factory::member_activity::MemberActivityFactory::new(&db, 123, 456)
//!     .message_count(30)
//!     .voice_minutes(12.5)
//!     .build()
//!     .await?;
//! ```

pub mod guild_level_settings;
pub mod helpers;
pub mod member_activity;

// Re-export commonly used factory functions for concise usage
pub use guild_level_settings::create_guild_settings;
pub use member_activity::create_member_activity;
