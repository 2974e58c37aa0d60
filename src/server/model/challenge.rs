//! Challenge domain models and parameters.
//!
//! A challenge is a match between two ladder entries of the same tournament. It owns its
//! proposed dates and, once played, the per-game results.

use chrono::{DateTime, Utc};
use entity::challenge::ChallengeStatus;

use crate::server::model::{reference::Ref, team_tournament::TeamTournament};

/// A value recorded for each side of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidePair {
    pub challenger: i32,
    pub defending: i32,
}

/// One of the dates offered by the defender.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposedDate {
    /// 1-indexed position in the order the dates were proposed
    pub option_number: i32,
    pub date: DateTime<Utc>,
}

/// Outcome of a single game within the series.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub winner_team_tournament_id: String,
    pub loser_team_tournament_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeResult {
    pub winner_team_tournament_id: String,
    /// Series score written from the winner's side, e.g. `2-1`
    pub score: String,
    pub games: Vec<GameResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub id: String,
    pub tournament_id: String,
    pub challenger_team_tournament_id: String,
    pub defending_team_tournament_id: String,
    pub status: ChallengeStatus,
    pub proposed_dates: Vec<ProposedDate>,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Snapshot of both tiers when the challenge was issued
    pub tier_before: SidePair,
    pub tier_after: Option<SidePair>,
    pub prestige_awarded: Option<SidePair>,
    pub result: Option<ChallengeResult>,
    pub forfeited_by: Option<String>,
    pub cancel_reason: Option<String>,
    pub cast_demand: bool,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Challenge {
    /// Converts a challenge row and its child rows to a domain model.
    ///
    /// Child rows are sorted by their position, so callers may pass them in any order.
    ///
    /// # Arguments
    /// - `entity` - Challenge row
    /// - `dates` - Proposed date rows of this challenge
    /// - `games` - Game rows of this challenge
    pub fn from_entity(
        entity: entity::challenge::Model,
        mut dates: Vec<entity::challenge_proposed_date::Model>,
        mut games: Vec<entity::challenge_game::Model>,
    ) -> Self {
        dates.sort_by_key(|d| d.option_number);
        games.sort_by_key(|g| g.game_number);

        let tier_after = match (entity.challenger_tier_after, entity.defending_tier_after) {
            (Some(challenger), Some(defending)) => Some(SidePair {
                challenger,
                defending,
            }),
            _ => None,
        };
        let prestige_awarded = match (
            entity.challenger_prestige_awarded,
            entity.defending_prestige_awarded,
        ) {
            (Some(challenger), Some(defending)) => Some(SidePair {
                challenger,
                defending,
            }),
            _ => None,
        };
        let result = match (entity.winner_team_tournament_id, entity.score) {
            (Some(winner_team_tournament_id), Some(score)) => Some(ChallengeResult {
                winner_team_tournament_id,
                score,
                games: games
                    .into_iter()
                    .map(|g| GameResult {
                        winner_team_tournament_id: g.winner_team_tournament_id,
                        loser_team_tournament_id: g.loser_team_tournament_id,
                    })
                    .collect(),
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            challenger_team_tournament_id: entity.challenger_team_tournament_id,
            defending_team_tournament_id: entity.defending_team_tournament_id,
            status: entity.status,
            proposed_dates: dates
                .into_iter()
                .map(|d| ProposedDate {
                    option_number: d.option_number,
                    date: d.proposed_date,
                })
                .collect(),
            scheduled_date: entity.scheduled_date,
            tier_before: SidePair {
                challenger: entity.challenger_tier_before,
                defending: entity.defending_tier_before,
            },
            tier_after,
            prestige_awarded,
            result,
            forfeited_by: entity.forfeited_by,
            cancel_reason: entity.cancel_reason,
            cast_demand: entity.cast_demand,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        }
    }

    pub fn is_participant(&self, team_tournament_id: &str) -> bool {
        self.challenger_team_tournament_id == team_tournament_id
            || self.defending_team_tournament_id == team_tournament_id
    }

    /// The other side of the challenge, if `team_tournament_id` takes part in it.
    pub fn opponent_of(&self, team_tournament_id: &str) -> Option<&str> {
        if self.challenger_team_tournament_id == team_tournament_id {
            Some(&self.defending_team_tournament_id)
        } else if self.defending_team_tournament_id == team_tournament_id {
            Some(&self.challenger_team_tournament_id)
        } else {
            None
        }
    }
}

/// Parameters for issuing a challenge.
#[derive(Debug, Clone)]
pub struct CreateChallengeParams {
    pub challenger: Ref<TeamTournament>,
    pub defending: Ref<TeamTournament>,
    /// Whether the teams asked for the match to be cast
    pub cast_demand: bool,
}

/// Row written when a challenge is issued, after references are resolved.
#[derive(Debug, Clone)]
pub struct NewChallenge {
    pub tournament_id: String,
    pub challenger_team_tournament_id: String,
    pub defending_team_tournament_id: String,
    pub tier_before: SidePair,
    pub cast_demand: bool,
    pub created_at: DateTime<Utc>,
}

/// Parameters for reporting a played series.
#[derive(Debug, Clone)]
pub struct SubmitResultParams {
    pub challenge_id: String,
    pub winner_team_tournament_id: String,
    pub score: String,
    pub games: Vec<GameResult>,
}

/// Everything written to a challenge row when it reaches a terminal state.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub status: ChallengeStatus,
    pub winner_team_tournament_id: Option<String>,
    pub score: Option<String>,
    pub tier_after: Option<SidePair>,
    pub prestige_awarded: Option<SidePair>,
    pub forfeited_by: Option<String>,
    pub cancel_reason: Option<String>,
    pub resolved_at: DateTime<Utc>,
}
