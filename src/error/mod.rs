//! Error types for the leveling bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and
//! collaborator errors (database, Discord, scheduler). Handlers and the sweep
//! catch `AppError` at their boundaries, log it, and move on; nothing in the
//! event path propagates an error far enough to take the process down.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application. Most variants
/// use `#[from]` for automatic conversion at `?` sites.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error: a missing environment variable at startup, or a
    /// missing/malformed leveling setting for a guild whose module is enabled.
    ///
    /// Aborts the triggering operation. Leveling settings are never silently
    /// defaulted when absent.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected state, such as a stored ID that
    /// fails to parse.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Treated as transient by event handlers and the voice-flush sweep: the
    /// affected member's update is deferred to the next event or tick.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
