//! Application state shared by the bot event handler and the command controllers.
//!
//! The state is built once during startup and cloned into every consumer. All fields are
//! cheap to clone: `DatabaseConnection` is a pool handle, the notifier is reference counted
//! and `MaintenanceScheduler` keeps its mutable parts behind `Arc`s.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{scheduler::maintenance::MaintenanceScheduler, service::notification::Notifier};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Outbound notification channel (Discord DMs and channel posts).
    pub notifier: Arc<dyn Notifier>,

    /// Handle to the running maintenance scheduler, used by admin commands to change its
    /// channel or settings and to trigger a sweep by hand.
    pub maintenance: MaintenanceScheduler,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Notification channel shared with the scheduler
    /// - `maintenance` - Maintenance scheduler handle
    ///
    /// # Returns
    /// - `AppState` - Initialized application state
    pub fn new(
        db: DatabaseConnection,
        notifier: Arc<dyn Notifier>,
        maintenance: MaintenanceScheduler,
    ) -> Self {
        Self {
            db,
            notifier,
            maintenance,
        }
    }
}
