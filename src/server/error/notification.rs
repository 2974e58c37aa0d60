use thiserror::Error;

use crate::server::error::internal::InternalError;

/// Best-effort delivery failure for an outbound notification.
///
/// Never propagated into the state machine. Callers log it and move on.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Discord rejected the message (user has DMs closed, missing channel access, ...).
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// A recipient or channel id could not be interpreted.
    #[error(transparent)]
    InvalidTarget(#[from] InternalError),
}

impl From<serenity::Error> for NotificationError {
    fn from(err: serenity::Error) -> Self {
        NotificationError::Discord(Box::new(err))
    }
}
