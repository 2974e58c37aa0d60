//! Outbound notifications.
//!
//! The ladder core only knows the `Notifier` trait. `DiscordNotifier` delivers through the
//! bot's HTTP client: direct messages to each recipient and plain posts to channels.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateMessage, UserId},
    async_trait,
    http::Http,
};

use crate::server::{error::notification::NotificationError, model::notification::NotificationEvent};

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers an event to every recipient.
    ///
    /// Implementations attempt all recipients and report the last failure, so one
    /// unreachable captain does not stop the others from being told.
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotificationError>;

    /// Posts a message to a channel.
    async fn post_to_channel(&self, channel_id: u64, message: &str)
        -> Result<(), NotificationError>;
}

pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotificationError> {
        let mut last_error = None;

        for recipient in &event.recipient_ids {
            let message = CreateMessage::new().content(&event.message);

            match UserId::new(*recipient)
                .direct_message(&self.http, message)
                .await
            {
                Ok(_) => {
                    tracing::debug!(
                        "Sent notification for challenge {} to {}",
                        event.challenge_id,
                        recipient
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to DM {} about challenge {}: {}",
                        recipient,
                        event.challenge_id,
                        e
                    );
                    last_error = Some(NotificationError::from(e));
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn post_to_channel(
        &self,
        channel_id: u64,
        message: &str,
    ) -> Result<(), NotificationError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(message))
            .await?;

        Ok(())
    }
}
