//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Used to log the connection, set
//! the bot's activity and report how many ladders are running.

use serenity::all::{ActivityData, Context, Ready};

use crate::server::{controller::tournament::list_active_tournaments, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Climbing the ladder")));

    match list_active_tournaments(state).await {
        Ok(tournaments) => {
            tracing::info!("{} active tournament(s) loaded", tournaments.len());
        }
        Err(e) => {
            tracing::error!("Failed to load active tournaments: {}", e);
        }
    }
}
