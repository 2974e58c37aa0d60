use crate::server::{
    data::team_tournament::TeamTournamentRepository,
    error::AppError,
    model::{
        challenge::{CreateChallengeParams, GameResult, SubmitResultParams},
        team_tournament::TeamTournament,
    },
    service::challenge::ChallengeService,
};
use chrono::{DateTime, Duration, Utc};
use entity::{challenge::ChallengeStatus, tournament::MatchFormat};
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, challenge::ChallengeFactory, helpers::create_matchup,
        team_tournament::TeamTournamentFactory, tournament::TournamentFactory,
    },
};

mod create;
mod forfeit;
mod propose_dates;
mod schedule;

/// Loads the current state of a ladder entry.
async fn entry(db: &DatabaseConnection, id: &str) -> Result<TeamTournament, AppError> {
    Ok(TeamTournamentRepository::new(db).get_by_id(id).await?.unwrap())
}

/// RFC 3339 strings for `count` distinct dates starting a day after `now`.
fn date_options(now: DateTime<Utc>, count: i64) -> Vec<String> {
    (1..=count)
        .map(|day| (now + Duration::days(day)).to_rfc3339())
        .collect()
}

fn result_params(challenge_id: &str, winner: &str, score: &str) -> SubmitResultParams {
    SubmitResultParams {
        challenge_id: challenge_id.to_string(),
        winner_team_tournament_id: winner.to_string(),
        score: score.to_string(),
        games: Vec::new(),
    }
}
