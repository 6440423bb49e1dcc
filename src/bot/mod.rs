//! Discord bot integration.
//!
//! This module wires the leveling engine to Discord's gateway. Event handlers
//! convert raw gateway events (messages, voice state transitions, slash
//! commands) into engine calls; everything interesting happens in the service
//! layer.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and slash-command context
//! - `GUILD_MESSAGES` - Message events for message XP
//! - `GUILD_VOICE_STATES` - Voice join/leave transitions and live voice state
//! - `GUILD_MEMBERS` - Member fetches for role reconciliation (privileged
//!   intent, must be enabled in the Discord Developer Portal)

pub mod handler;
pub mod start;
