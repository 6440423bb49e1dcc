use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Message, Ready, VoiceState};
use serenity::async_trait;

pub mod command;
pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, ctx, message).await;
    }

    /// Called when a member's voice state changes (join, leave, mute, move)
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.db, ctx, old, new).await;
    }

    /// Called when an interaction (slash command) is created
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        command::handle_interaction(&self.db, ctx, interaction).await;
    }
}
