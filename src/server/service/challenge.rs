//! Challenge lifecycle.
//!
//! ```text
//! pending ──propose_dates──> pending ──schedule──> scheduled
//!    │                                                │
//!    ├──submit_result / forfeit / cancel──────────────┤
//!    v                                                v
//! completed | forfeited | cancelled           (same terminal states)
//! ```
//!
//! Every resolving operation runs in a single transaction that re-reads the challenge, writes
//! the terminal state behind a status guard and updates both ladder entries before commit.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use entity::{challenge::ChallengeStatus, tournament::TournamentStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        challenge::ChallengeRepository, team_tournament::TeamTournamentRepository,
        tournament::TournamentRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        challenge::{
            Challenge, CreateChallengeParams, GameResult, NewChallenge, Resolution, SidePair,
            SubmitResultParams,
        },
        reference::Ref,
        team_tournament::TeamTournament,
        tournament::Tournament,
    },
    service::ladder::{self, LadderRules},
    util::{parse::parse_proposed_date, time::start_of_month},
};

/// Decided outcome of a challenge before ladder effects are computed.
struct Settlement {
    status: ChallengeStatus,
    winner_team_tournament_id: String,
    score: String,
    games: Vec<GameResult>,
    forfeited_by: Option<String>,
}

pub struct ChallengeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChallengeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a challenge from one ladder entry to another.
    ///
    /// # Arguments
    /// - `params` - Both sides as references plus the cast request flag
    /// - `now` - Creation time, also used for the protection and monthly quota checks
    ///
    /// # Returns
    /// - `Ok(Challenge)` - New pending challenge with tier snapshots
    /// - `Err(AppError::NotFound)` - An entry or the tournament does not exist
    /// - `Err(AppError::Validation)` - Same entry on both sides or entries from different tournaments
    /// - `Err(AppError::InvalidState)` - Tournament inactive, defender protected, quota used up,
    ///   or an open challenge between the pair already exists
    pub async fn create(
        &self,
        params: CreateChallengeParams,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        let challenger = self.resolve_entry(params.challenger).await?;
        let defending = self.resolve_entry(params.defending).await?;

        if challenger.id == defending.id {
            return Err(AppError::Validation(
                "A team cannot challenge itself".to_string(),
            ));
        }
        if challenger.tournament_id != defending.tournament_id {
            return Err(AppError::Validation(
                "Both teams must be entered in the same tournament".to_string(),
            ));
        }

        let tournament = self.require_tournament(self.db, &challenger.tournament_id).await?;
        if tournament.status != TournamentStatus::Active {
            return Err(AppError::InvalidState(format!(
                "Tournament {} is not active",
                tournament.name
            )));
        }

        if let Some(until) = defending.protected_until.filter(|until| *until > now) {
            return Err(AppError::InvalidState(format!(
                "Defending team is protected until {}",
                until.format("%Y-%m-%d %H:%M UTC")
            )));
        }

        let challenges = ChallengeRepository::new(self.db);

        let issued = challenges
            .count_issued_since(&challenger.id, start_of_month(now))
            .await?;
        if issued >= tournament.rules.max_challenges_per_month.max(0) as u64 {
            return Err(AppError::InvalidState(format!(
                "Challenger already issued {} challenges this month (limit {})",
                issued, tournament.rules.max_challenges_per_month
            )));
        }

        if challenges
            .open_exists_between(&challenger.id, &defending.id)
            .await?
        {
            return Err(AppError::InvalidState(
                "An open challenge between these teams already exists".to_string(),
            ));
        }

        let challenge = challenges
            .create(NewChallenge {
                tournament_id: tournament.id,
                challenger_team_tournament_id: challenger.id,
                defending_team_tournament_id: defending.id,
                tier_before: SidePair {
                    challenger: challenger.tier,
                    defending: defending.tier,
                },
                cast_demand: params.cast_demand,
                created_at: now,
            })
            .await?;

        tracing::info!(
            "Challenge {} issued: {} (tier {}) vs {} (tier {})",
            challenge.id,
            challenge.challenger_team_tournament_id,
            challenge.tier_before.challenger,
            challenge.defending_team_tournament_id,
            challenge.tier_before.defending
        );

        Ok(challenge)
    }

    /// Records the date options offered by the defender.
    ///
    /// Dates are stored in the given order and numbered from 1. Existing options are never
    /// overwritten.
    ///
    /// # Returns
    /// - `Ok(Challenge)` - Challenge with its proposed dates, still pending
    /// - `Err(AppError::InvalidState)` - Challenge not pending or dates already proposed
    /// - `Err(AppError::Validation)` - Too few options, unparsable, past or duplicate dates
    pub async fn propose_dates(
        &self,
        challenge_id: &str,
        dates: &[String],
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        let txn = self.db.begin().await?;
        let challenges = ChallengeRepository::new(&txn);

        let challenge = require_challenge(&challenges, challenge_id).await?;
        if challenge.status != ChallengeStatus::Pending {
            return Err(AppError::InvalidState(format!(
                "Dates can only be proposed for pending challenges, this one is {}",
                status_label(challenge.status)
            )));
        }
        if !challenge.proposed_dates.is_empty() {
            return Err(AppError::InvalidState(
                "Dates have already been proposed for this challenge".to_string(),
            ));
        }

        let tournament = self.require_tournament(&txn, &challenge.tournament_id).await?;
        let required = tournament.rules.min_required_date_options.max(0) as usize;
        if dates.len() < required {
            return Err(AppError::Validation(format!(
                "At least {} date options are required, got {}",
                required,
                dates.len()
            )));
        }

        let parsed = dates
            .iter()
            .map(|raw| parse_proposed_date(raw))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(past) = parsed.iter().find(|date| **date <= now) {
            return Err(AppError::Validation(format!(
                "Proposed date {} is not in the future",
                past.format("%Y-%m-%d %H:%M UTC")
            )));
        }

        let unique: HashSet<_> = parsed.iter().collect();
        if unique.len() != parsed.len() {
            return Err(AppError::Validation(
                "Proposed dates must be distinct".to_string(),
            ));
        }

        challenges.insert_proposed_dates(challenge_id, &parsed).await?;
        txn.commit().await?;

        tracing::info!(
            "{} dates proposed for challenge {}",
            parsed.len(),
            challenge_id
        );

        self.require_written(challenge_id).await
    }

    /// Picks one of the proposed dates and schedules the match.
    ///
    /// # Arguments
    /// - `challenge_id` - Challenge to schedule
    /// - `selection` - 1-indexed option number
    /// - `now` - Current time; the selected date must still be ahead of it
    ///
    /// # Returns
    /// - `Ok(Challenge)` - Scheduled challenge
    /// - `Err(AppError::InvalidState)` - Not pending, no dates proposed, or selection out of range
    /// - `Err(AppError::Validation)` - Selected date already passed
    pub async fn schedule(
        &self,
        challenge_id: &str,
        selection: usize,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        let txn = self.db.begin().await?;
        let challenges = ChallengeRepository::new(&txn);

        let challenge = require_challenge(&challenges, challenge_id).await?;
        if challenge.status != ChallengeStatus::Pending {
            return Err(AppError::InvalidState(format!(
                "Only pending challenges can be scheduled, this one is {}",
                status_label(challenge.status)
            )));
        }
        if challenge.proposed_dates.is_empty() {
            return Err(AppError::InvalidState(
                "No dates have been proposed yet".to_string(),
            ));
        }

        let Some(option) = selection
            .checked_sub(1)
            .and_then(|index| challenge.proposed_dates.get(index))
        else {
            return Err(AppError::InvalidState(format!(
                "Option {} does not exist, pick between 1 and {}",
                selection,
                challenge.proposed_dates.len()
            )));
        };

        if option.date <= now {
            return Err(AppError::Validation(
                "The selected date has already passed".to_string(),
            ));
        }

        if !challenges.mark_scheduled(challenge_id, option.date).await? {
            return Err(AppError::InvalidState(
                "Challenge changed state while scheduling".to_string(),
            ));
        }
        txn.commit().await?;

        tracing::info!(
            "Challenge {} scheduled for {}",
            challenge_id,
            option.date
        );

        self.require_written(challenge_id).await
    }

    /// Reports the outcome of a played series and applies it to the ladder.
    ///
    /// # Returns
    /// - `Ok(Challenge)` - Completed challenge with tiers after and prestige awarded
    /// - `Err(AppError::InvalidState)` - Challenge already terminal
    /// - `Err(AppError::Validation)` - Winner not a participant, bad score or inconsistent games
    pub async fn submit_result(
        &self,
        params: SubmitResultParams,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        let SubmitResultParams {
            challenge_id,
            winner_team_tournament_id,
            score,
            games,
        } = params;

        self.settle(&challenge_id, now, move |challenge, tournament| {
            let Some(loser) = challenge.opponent_of(&winner_team_tournament_id) else {
                return Err(AppError::Validation(
                    "Winner must be one of the challenge participants".to_string(),
                ));
            };

            ladder::validate_series(
                tournament.format,
                &score,
                &games,
                &winner_team_tournament_id,
                loser,
            )?;

            Ok(Settlement {
                status: ChallengeStatus::Completed,
                winner_team_tournament_id,
                score: score.trim().to_string(),
                games,
                forfeited_by: None,
            })
        })
        .await
    }

    /// Forfeits a challenge on behalf of one side. The opponent wins with the format's
    /// forfeit score and the usual ladder effects apply.
    ///
    /// # Returns
    /// - `Ok(Challenge)` - Forfeited challenge
    /// - `Err(AppError::InvalidState)` - Challenge already terminal
    /// - `Err(AppError::Validation)` - Forfeiting side is not a participant
    pub async fn forfeit(
        &self,
        challenge_id: &str,
        forfeiting_team_tournament_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        self.settle(challenge_id, now, |challenge, tournament| {
            let Some(winner) = challenge.opponent_of(forfeiting_team_tournament_id) else {
                return Err(AppError::Validation(
                    "Only a challenge participant can forfeit".to_string(),
                ));
            };

            Ok(Settlement {
                status: ChallengeStatus::Forfeited,
                winner_team_tournament_id: winner.to_string(),
                score: ladder::forfeit_score(tournament.format),
                games: Vec::new(),
                forfeited_by: Some(forfeiting_team_tournament_id.to_string()),
            })
        })
        .await
    }

    /// Cancels an open challenge without touching either ladder entry.
    pub async fn cancel(
        &self,
        challenge_id: &str,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        let txn = self.db.begin().await?;
        let challenges = ChallengeRepository::new(&txn);

        let challenge = require_challenge(&challenges, challenge_id).await?;
        ensure_open(&challenge)?;

        let resolved = challenges
            .resolve(
                challenge_id,
                Resolution {
                    status: ChallengeStatus::Cancelled,
                    winner_team_tournament_id: None,
                    score: None,
                    tier_after: None,
                    prestige_awarded: None,
                    forfeited_by: None,
                    cancel_reason: Some(reason.trim().to_string()),
                    resolved_at: now,
                },
            )
            .await?;
        if !resolved {
            return Err(already_resolved(challenge_id));
        }
        txn.commit().await?;

        tracing::info!("Challenge {} cancelled: {}", challenge_id, reason);

        self.require_written(challenge_id).await
    }

    pub async fn get_by_id(&self, challenge_id: &str) -> Result<Option<Challenge>, AppError> {
        Ok(ChallengeRepository::new(self.db)
            .get_by_id(challenge_id)
            .await?)
    }

    /// Pending challenges of a tournament whose defender let the response window lapse.
    pub async fn get_past_due_defender_responses(
        &self,
        tournament_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Challenge>, AppError> {
        let tournament = self.require_tournament(self.db, tournament_id).await?;

        Ok(ChallengeRepository::new(self.db)
            .get_past_due(
                tournament_id,
                tournament.rules.challenge_timeframe_in_days,
                now,
            )
            .await?)
    }

    /// Challenge history of a ladder entry, newest first.
    pub async fn list_for_team_tournament(
        &self,
        team_tournament_id: &str,
    ) -> Result<Vec<Challenge>, AppError> {
        Ok(ChallengeRepository::new(self.db)
            .list_for_team_tournament(team_tournament_id)
            .await?)
    }

    /// Shared path for every resolution that produces a winner.
    ///
    /// `decide` sees the freshly read challenge and its tournament and either rejects the
    /// request or returns the settlement to apply. Any error before commit drops the
    /// transaction, rolling back all writes.
    async fn settle<F>(
        &self,
        challenge_id: &str,
        now: DateTime<Utc>,
        decide: F,
    ) -> Result<Challenge, AppError>
    where
        F: FnOnce(&Challenge, &Tournament) -> Result<Settlement, AppError>,
    {
        let txn = self.db.begin().await?;
        let challenges = ChallengeRepository::new(&txn);
        let entries = TeamTournamentRepository::new(&txn);

        let challenge = require_challenge(&challenges, challenge_id).await?;
        ensure_open(&challenge)?;

        let tournament = self.require_tournament(&txn, &challenge.tournament_id).await?;
        let settlement = decide(&challenge, &tournament)?;

        let challenger = require_entry(&entries, &challenge.challenger_team_tournament_id).await?;
        let defending = require_entry(&entries, &challenge.defending_team_tournament_id).await?;

        let defender_won = settlement.winner_team_tournament_id == defending.id;
        let (winner, loser) = if defender_won {
            (&defending, &challenger)
        } else {
            (&challenger, &defending)
        };

        let outcome = ladder::apply_result(
            winner,
            loser,
            defender_won,
            LadderRules {
                max_tiers: tournament.max_tiers,
                protection_days_after_defense: tournament.rules.protection_days_after_defense,
            },
            now,
        )?;

        let (tier_after, prestige_awarded) = if defender_won {
            (
                SidePair {
                    challenger: outcome.loser.tier,
                    defending: outcome.winner.tier,
                },
                SidePair {
                    challenger: outcome.loser_prestige_delta,
                    defending: outcome.winner_prestige_delta,
                },
            )
        } else {
            (
                SidePair {
                    challenger: outcome.winner.tier,
                    defending: outcome.loser.tier,
                },
                SidePair {
                    challenger: outcome.winner_prestige_delta,
                    defending: outcome.loser_prestige_delta,
                },
            )
        };

        let resolved = challenges
            .resolve(
                challenge_id,
                Resolution {
                    status: settlement.status,
                    winner_team_tournament_id: Some(settlement.winner_team_tournament_id.clone()),
                    score: Some(settlement.score.clone()),
                    tier_after: Some(tier_after),
                    prestige_awarded: Some(prestige_awarded),
                    forfeited_by: settlement.forfeited_by,
                    cancel_reason: None,
                    resolved_at: now,
                },
            )
            .await?;
        if !resolved {
            return Err(already_resolved(challenge_id));
        }

        challenges
            .insert_games(challenge_id, &settlement.games)
            .await?;
        entries.update_standing(&outcome.winner).await?;
        entries.update_standing(&outcome.loser).await?;

        txn.commit().await?;

        tracing::info!(
            "Challenge {} {}: {} won {}, tiers {}/{} -> {}/{}",
            challenge_id,
            status_label(settlement.status),
            settlement.winner_team_tournament_id,
            settlement.score,
            challenge.tier_before.challenger,
            challenge.tier_before.defending,
            tier_after.challenger,
            tier_after.defending
        );

        self.require_written(challenge_id).await
    }

    /// Loads the current row behind a reference.
    ///
    /// Loaded values are re-read too, since tier and protection may have moved since the
    /// caller fetched them.
    async fn resolve_entry(&self, entry: Ref<TeamTournament>) -> Result<TeamTournament, AppError> {
        require_entry(&TeamTournamentRepository::new(self.db), entry.id()).await
    }

    async fn require_tournament<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        tournament_id: &str,
    ) -> Result<Tournament, AppError> {
        TournamentRepository::new(db)
            .get_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tournament {} not found", tournament_id)))
    }

    /// Reads back a challenge this service just wrote.
    async fn require_written(&self, challenge_id: &str) -> Result<Challenge, AppError> {
        ChallengeRepository::new(self.db)
            .get_by_id(challenge_id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    table: "challenge",
                    id: challenge_id.to_string(),
                }
                .into()
            })
    }
}

async fn require_challenge<C: sea_orm::ConnectionTrait>(
    challenges: &ChallengeRepository<'_, C>,
    challenge_id: &str,
) -> Result<Challenge, AppError> {
    challenges
        .get_by_id(challenge_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Challenge {} not found", challenge_id)))
}

async fn require_entry<C: sea_orm::ConnectionTrait>(
    entries: &TeamTournamentRepository<'_, C>,
    team_tournament_id: &str,
) -> Result<TeamTournament, AppError> {
    entries
        .get_by_id(team_tournament_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Team tournament entry {} not found",
                team_tournament_id
            ))
        })
}

fn ensure_open(challenge: &Challenge) -> Result<(), AppError> {
    if challenge.status.is_terminal() {
        return Err(AppError::InvalidState(format!(
            "Challenge {} is already {}",
            challenge.id,
            status_label(challenge.status)
        )));
    }
    Ok(())
}

fn already_resolved(challenge_id: &str) -> AppError {
    AppError::InvalidState(format!(
        "Challenge {} was resolved concurrently",
        challenge_id
    ))
}

pub fn status_label(status: ChallengeStatus) -> &'static str {
    match status {
        ChallengeStatus::Pending => "pending",
        ChallengeStatus::Scheduled => "scheduled",
        ChallengeStatus::Completed => "completed",
        ChallengeStatus::Cancelled => "cancelled",
        ChallengeStatus::Forfeited => "forfeited",
    }
}
