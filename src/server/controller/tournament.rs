use chrono::Utc;
use entity::tournament::TournamentStatus;

use crate::server::{
    controller::{or_declined, succeeded},
    error::AppError,
    model::{
        team_tournament::{Standing, TeamTournament},
        tournament::{CreateTournamentParams, Tournament},
    },
    service::tournament::TournamentService,
    state::AppState,
};

/// Create a tournament. Admin only; access is checked by the command layer.
pub async fn create_tournament(
    state: &AppState,
    params: CreateTournamentParams,
) -> Result<Option<Tournament>, AppError> {
    let result = TournamentService::new(&state.db)
        .create(params, Utc::now())
        .await;

    or_declined("create_tournament", result)
}

pub async fn get_tournament(
    state: &AppState,
    tournament_id: &str,
) -> Result<Option<Tournament>, AppError> {
    TournamentService::new(&state.db).get_by_id(tournament_id).await
}

pub async fn list_active_tournaments(state: &AppState) -> Result<Vec<Tournament>, AppError> {
    TournamentService::new(&state.db).list_active().await
}

pub async fn set_tournament_status(
    state: &AppState,
    tournament_id: &str,
    status: TournamentStatus,
) -> Result<bool, AppError> {
    let result = TournamentService::new(&state.db)
        .set_status(tournament_id, status)
        .await;

    succeeded("set_tournament_status", result)
}

/// Enter a team into a tournament at a starting tier.
pub async fn add_team_to_tournament(
    state: &AppState,
    tournament_id: &str,
    team_id: &str,
    starting_tier: i32,
) -> Result<Option<TeamTournament>, AppError> {
    let result = TournamentService::new(&state.db)
        .add_team(tournament_id, team_id, starting_tier, Utc::now())
        .await;

    or_declined("add_team_to_tournament", result)
}

/// Ranked standings of a tournament, `None` if it does not exist.
pub async fn get_tournament_standings(
    state: &AppState,
    tournament_id: &str,
) -> Result<Option<Vec<Standing>>, AppError> {
    let result = TournamentService::new(&state.db)
        .get_standings(tournament_id)
        .await;

    or_declined("get_tournament_standings", result)
}
