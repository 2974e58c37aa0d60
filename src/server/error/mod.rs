//! Error types for the ladder backend.
//!
//! `AppError` is the top-level error returned by services and controllers. It separates
//! business-rule failures, which are reported back to the caller as a declined operation,
//! from infrastructure failures (database, Discord, scheduler) which propagate and get logged.

pub mod config;
pub mod internal;
pub mod notification;

use thiserror::Error;

use crate::server::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Most infrastructure variants use `#[from]` for automatic conversion with `?`. The
/// business-rule variants carry a human readable message that the presentation layer can
/// show to the user as-is.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
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

    /// Unexpected internal condition, usually a bug or corrupt data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Input failed validation (bad score, unparsable date, out of range tier, ...).
    ///
    /// # Fields
    /// - Message describing what was invalid
    #[error("{0}")]
    Validation(String),

    /// The operation is not legal in the current state of the target.
    ///
    /// Returned for terminal challenges, protected defenders, exhausted monthly quota and
    /// similar lifecycle violations.
    #[error("{0}")]
    InvalidState(String),

    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Actor lacks the permission required for the operation.
    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    /// Returns true for failures caused by the request itself rather than the infrastructure.
    ///
    /// Business-rule failures are reported to the caller and never retried.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidState(_)
                | AppError::NotFound(_)
                | AppError::Forbidden(_)
        )
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
