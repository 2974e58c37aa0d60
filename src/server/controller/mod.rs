//! Inbound command boundary.
//!
//! Slash commands and buttons call into these functions with plain identifiers. Each command
//! reports business-rule failures (validation, invalid state, missing records, permissions)
//! as `None` or `false` after logging them, so the presentation layer only has to render a
//! declined message. Infrastructure failures propagate as `Err`.

pub mod challenge;
pub mod maintenance;
pub mod team;
pub mod tournament;

use crate::server::error::AppError;

/// Turns a business-rule failure into `Ok(None)`.
pub(crate) fn or_declined<T>(command: &str, result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_business_rule() => {
            tracing::warn!("{} declined: {}", command, e);
            Ok(None)
        }
        Err(e) => {
            tracing::error!("{} failed: {}", command, e);
            Err(e)
        }
    }
}

/// Like [`or_declined`] for commands that only report success.
pub(crate) fn succeeded<T>(command: &str, result: Result<T, AppError>) -> Result<bool, AppError> {
    or_declined(command, result).map(|value| value.is_some())
}
