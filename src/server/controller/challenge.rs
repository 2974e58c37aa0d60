use chrono::Utc;

use crate::server::{
    controller::{or_declined, succeeded},
    error::AppError,
    model::challenge::{Challenge, CreateChallengeParams, GameResult, SubmitResultParams},
    service::challenge::ChallengeService,
    state::AppState,
};

/// Issue a challenge from one ladder entry to another.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `challenger_team_tournament_id` - Entry issuing the challenge
/// - `defending_team_tournament_id` - Entry being challenged
/// - `cast_demand` - Whether the match should be cast
///
/// # Returns
/// - `Ok(Some(Challenge))` - Challenge created
/// - `Ok(None)` - Declined (protected defender, monthly limit, inactive tournament, ...)
/// - `Err(AppError)` - Database failure
pub async fn create_challenge(
    state: &AppState,
    challenger_team_tournament_id: &str,
    defending_team_tournament_id: &str,
    cast_demand: bool,
) -> Result<Option<Challenge>, AppError> {
    let result = ChallengeService::new(&state.db)
        .create(
            CreateChallengeParams {
                challenger: challenger_team_tournament_id.into(),
                defending: defending_team_tournament_id.into(),
                cast_demand,
            },
            Utc::now(),
        )
        .await;

    or_declined("create_challenge", result)
}

/// Record the defender's date options for a challenge.
pub async fn propose_dates(
    state: &AppState,
    challenge_id: &str,
    dates: &[String],
) -> Result<bool, AppError> {
    let result = ChallengeService::new(&state.db)
        .propose_dates(challenge_id, dates, Utc::now())
        .await;

    succeeded("propose_dates", result)
}

/// Schedule a challenge on one of its proposed dates (`selection` is 1-indexed).
pub async fn schedule_challenge(
    state: &AppState,
    challenge_id: &str,
    selection: usize,
) -> Result<bool, AppError> {
    let result = ChallengeService::new(&state.db)
        .schedule(challenge_id, selection, Utc::now())
        .await;

    succeeded("schedule_challenge", result)
}

/// Report the result of a played series.
///
/// # Returns
/// - `Ok(true)` - Result recorded and ladder updated
/// - `Ok(false)` - Declined (already resolved, bad score, winner not a participant, ...)
/// - `Err(AppError)` - Database failure
pub async fn submit_challenge_result(
    state: &AppState,
    challenge_id: &str,
    winner_team_tournament_id: &str,
    score: &str,
    games: Vec<GameResult>,
) -> Result<bool, AppError> {
    let result = ChallengeService::new(&state.db)
        .submit_result(
            SubmitResultParams {
                challenge_id: challenge_id.to_string(),
                winner_team_tournament_id: winner_team_tournament_id.to_string(),
                score: score.to_string(),
                games,
            },
            Utc::now(),
        )
        .await;

    succeeded("submit_challenge_result", result)
}

pub async fn forfeit_challenge(
    state: &AppState,
    challenge_id: &str,
    forfeiting_team_tournament_id: &str,
) -> Result<bool, AppError> {
    let result = ChallengeService::new(&state.db)
        .forfeit(challenge_id, forfeiting_team_tournament_id, Utc::now())
        .await;

    succeeded("forfeit_challenge", result)
}

pub async fn cancel_challenge(
    state: &AppState,
    challenge_id: &str,
    reason: &str,
) -> Result<bool, AppError> {
    let result = ChallengeService::new(&state.db)
        .cancel(challenge_id, reason, Utc::now())
        .await;

    succeeded("cancel_challenge", result)
}

pub async fn get_challenge_by_id(
    state: &AppState,
    challenge_id: &str,
) -> Result<Option<Challenge>, AppError> {
    ChallengeService::new(&state.db).get_by_id(challenge_id).await
}

/// Pending challenges of a tournament whose defender has not responded in time.
///
/// Returns `None` when the tournament does not exist.
pub async fn get_past_due_defender_responses(
    state: &AppState,
    tournament_id: &str,
) -> Result<Option<Vec<Challenge>>, AppError> {
    let result = ChallengeService::new(&state.db)
        .get_past_due_defender_responses(tournament_id, Utc::now())
        .await;

    or_declined("get_past_due_defender_responses", result)
}

/// Challenge history of a ladder entry, newest first.
pub async fn get_team_challenges(
    state: &AppState,
    team_tournament_id: &str,
) -> Result<Vec<Challenge>, AppError> {
    ChallengeService::new(&state.db)
        .list_for_team_tournament(team_tournament_id)
        .await
}
