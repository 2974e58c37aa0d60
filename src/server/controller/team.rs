use chrono::Utc;

use crate::server::{
    controller::{or_declined, succeeded},
    error::AppError,
    model::team::{CreateTeamParams, Team},
    service::team::TeamService,
    state::AppState,
};

/// Create a team with the invoking user as captain.
pub async fn create_team(
    state: &AppState,
    name: &str,
    captain_discord_id: u64,
    discord_role_id: Option<u64>,
) -> Result<Option<Team>, AppError> {
    let result = TeamService::new(&state.db)
        .create(
            CreateTeamParams {
                name: name.to_string(),
                captain_discord_id,
                discord_role_id,
            },
            Utc::now(),
        )
        .await;

    or_declined("create_team", result)
}

pub async fn get_team(state: &AppState, team_id: &str) -> Result<Option<Team>, AppError> {
    TeamService::new(&state.db).get_by_id(team_id).await
}

/// Add a member. The actor must be the team captain or an admin.
pub async fn add_team_member(
    state: &AppState,
    team_id: &str,
    actor_discord_id: u64,
    discord_id: u64,
    role: &str,
    actor_is_admin: bool,
) -> Result<bool, AppError> {
    let result = TeamService::new(&state.db)
        .add_member(
            team_id,
            actor_discord_id,
            discord_id,
            role,
            actor_is_admin,
            Utc::now(),
        )
        .await;

    succeeded("add_team_member", result)
}

pub async fn remove_team_member(
    state: &AppState,
    team_id: &str,
    actor_discord_id: u64,
    discord_id: u64,
    actor_is_admin: bool,
) -> Result<bool, AppError> {
    let result = TeamService::new(&state.db)
        .remove_member(team_id, actor_discord_id, discord_id, actor_is_admin)
        .await;

    succeeded("remove_team_member", result)
}

pub async fn transfer_captain(
    state: &AppState,
    team_id: &str,
    actor_discord_id: u64,
    new_captain_discord_id: u64,
    actor_is_admin: bool,
) -> Result<bool, AppError> {
    let result = TeamService::new(&state.db)
        .transfer_captain(team_id, actor_discord_id, new_captain_discord_id, actor_is_admin)
        .await;

    succeeded("transfer_captain", result)
}

pub async fn set_team_role(
    state: &AppState,
    team_id: &str,
    actor_discord_id: u64,
    role_id: Option<u64>,
    actor_is_admin: bool,
) -> Result<bool, AppError> {
    let result = TeamService::new(&state.db)
        .set_discord_role(team_id, actor_discord_id, role_id, actor_is_admin)
        .await;

    succeeded("set_team_role", result)
}

pub async fn get_team_captain(state: &AppState, team_id: &str) -> Result<Option<u64>, AppError> {
    TeamService::new(&state.db).get_captain(team_id).await
}
