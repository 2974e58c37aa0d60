use chrono::Utc;

use crate::server::{
    controller::or_declined,
    error::AppError,
    scheduler::maintenance::{CycleReport, MaintenanceConfig, MaintenanceConfigUpdate},
    state::AppState,
};

/// Set or clear the channel receiving auto-forfeit summaries.
pub async fn set_maintenance_channel(state: &AppState, channel_id: Option<u64>) {
    state.maintenance.set_maintenance_channel(channel_id).await;
}

pub async fn get_maintenance_config(state: &AppState) -> MaintenanceConfig {
    state.maintenance.config().await
}

/// Apply a partial configuration given as a JSON object, e.g. `{"batch_size": 20}`.
///
/// # Returns
/// - `Ok(Some(MaintenanceConfig))` - Configuration after the update
/// - `Ok(None)` - Unreadable JSON, unknown field or invalid value
pub async fn update_maintenance_config(
    state: &AppState,
    patch: &str,
) -> Result<Option<MaintenanceConfig>, AppError> {
    let update = serde_json::from_str::<MaintenanceConfigUpdate>(patch)
        .map_err(|e| AppError::Validation(format!("Invalid maintenance settings: {}", e)));

    let result = match update {
        Ok(update) => state.maintenance.update_config(update).await,
        Err(e) => Err(e),
    };

    or_declined("update_maintenance_config", result)
}

/// Run a maintenance sweep immediately.
pub async fn run_maintenance_now(state: &AppState) -> Result<CycleReport, AppError> {
    state.maintenance.run_cycle(Utc::now()).await
}
