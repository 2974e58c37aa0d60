use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use entity::tournament::TournamentStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        team::TeamRepository, team_tournament::TeamTournamentRepository,
        tournament::TournamentRepository,
    },
    error::AppError,
    model::{
        team_tournament::{Standing, TeamTournament},
        tournament::{CreateTournamentParams, Tournament, MAX_RULE_DAYS, MAX_TIERS_LIMIT},
    },
};

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tournament after validating its shape and rules.
    ///
    /// # Returns
    /// - `Ok(Tournament)` - The new tournament
    /// - `Err(AppError::Validation)` - Empty name, tier count outside 1..=16, end not after
    ///   start, a non-positive rule value, or a period longer than `MAX_RULE_DAYS`
    pub async fn create(
        &self,
        params: CreateTournamentParams,
        now: DateTime<Utc>,
    ) -> Result<Tournament, AppError> {
        validate_params(&params)?;

        let tournament = TournamentRepository::new(self.db)
            .create(params, now)
            .await?;

        tracing::info!(
            "Tournament {} ({}) created with {} tiers",
            tournament.name,
            tournament.id,
            tournament.max_tiers
        );

        Ok(tournament)
    }

    pub async fn get_by_id(&self, tournament_id: &str) -> Result<Option<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db)
            .get_by_id(tournament_id)
            .await?)
    }

    pub async fn list_active(&self) -> Result<Vec<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db).list_active().await?)
    }

    /// Changes the lifecycle status of a tournament.
    ///
    /// Status changes come from admins and are trusted: moving backwards (for example
    /// completed to active) is allowed but logged as a warning.
    pub async fn set_status(
        &self,
        tournament_id: &str,
        status: TournamentStatus,
    ) -> Result<Tournament, AppError> {
        let current = self.require_tournament(tournament_id).await?;

        if status_rank(status) < status_rank(current.status) {
            tracing::warn!(
                "Tournament {} moved backwards from {:?} to {:?}",
                tournament_id,
                current.status,
                status
            );
        }

        let tournament = TournamentRepository::new(self.db)
            .set_status(tournament_id, status)
            .await?;

        tracing::info!("Tournament {} is now {:?}", tournament_id, status);

        Ok(tournament)
    }

    /// Enters a team into a tournament at a starting tier.
    ///
    /// # Returns
    /// - `Ok(TeamTournament)` - The new ladder entry
    /// - `Err(AppError::NotFound)` - Tournament or team missing
    /// - `Err(AppError::Validation)` - Tier outside the ladder
    /// - `Err(AppError::InvalidState)` - Tournament completed, team already entered, or the
    ///   tier is full while tier limits are enforced
    pub async fn add_team(
        &self,
        tournament_id: &str,
        team_id: &str,
        starting_tier: i32,
        now: DateTime<Utc>,
    ) -> Result<TeamTournament, AppError> {
        let tournament = self.require_tournament(tournament_id).await?;

        if TeamRepository::new(self.db).get_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Team {} not found", team_id)));
        }

        if tournament.status == TournamentStatus::Completed {
            return Err(AppError::InvalidState(format!(
                "Tournament {} has already finished",
                tournament.name
            )));
        }

        let Some(limit) = tournament.tier_limit(starting_tier) else {
            return Err(AppError::Validation(format!(
                "Tier must be between 1 and {}",
                tournament.max_tiers
            )));
        };

        let entries = TeamTournamentRepository::new(self.db);

        if entries
            .find_by_team_and_tournament(team_id, tournament_id)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidState(
                "Team is already entered in this tournament".to_string(),
            ));
        }

        if tournament.enforce_tier_limits {
            let occupied = entries.count_in_tier(tournament_id, starting_tier).await?;
            if occupied >= limit as u64 {
                return Err(AppError::InvalidState(format!(
                    "Tier {} is full ({} of {})",
                    starting_tier, occupied, limit
                )));
            }
        }

        let entry = entries
            .create(team_id, tournament_id, starting_tier, now)
            .await?;

        tracing::info!(
            "Team {} entered tournament {} at tier {}",
            team_id,
            tournament_id,
            starting_tier
        );

        Ok(entry)
    }

    /// Standings ordered by tier, then prestige, then wins, then team name.
    pub async fn get_standings(&self, tournament_id: &str) -> Result<Vec<Standing>, AppError> {
        self.require_tournament(tournament_id).await?;

        let mut standings = TeamTournamentRepository::new(self.db)
            .get_with_team_names(tournament_id)
            .await?;
        standings.sort_by(compare_standings);

        Ok(standings)
    }

    async fn require_tournament(&self, tournament_id: &str) -> Result<Tournament, AppError> {
        TournamentRepository::new(self.db)
            .get_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tournament {} not found", tournament_id)))
    }
}

fn validate_params(params: &CreateTournamentParams) -> Result<(), AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Tournament name cannot be empty".to_string(),
        ));
    }
    if !(1..=MAX_TIERS_LIMIT).contains(&params.max_tiers) {
        return Err(AppError::Validation(format!(
            "Tier count must be between 1 and {}",
            MAX_TIERS_LIMIT
        )));
    }
    if params.end_date <= params.start_date {
        return Err(AppError::Validation(
            "Tournament must end after it starts".to_string(),
        ));
    }

    let rules = &params.rules;
    let positive = [
        ("challenge timeframe", rules.challenge_timeframe_in_days),
        ("challenges per month", rules.max_challenges_per_month),
        ("required date options", rules.min_required_date_options),
    ];
    if let Some((name, _)) = positive.iter().find(|(_, value)| *value < 1) {
        return Err(AppError::Validation(format!("The {} must be at least 1", name)));
    }
    if rules.protection_days_after_defense < 0 || rules.grace_period_days.is_some_and(|d| d < 0) {
        return Err(AppError::Validation(
            "Protection and grace periods cannot be negative".to_string(),
        ));
    }

    let periods = [
        ("challenge timeframe", Some(rules.challenge_timeframe_in_days)),
        ("protection period", Some(rules.protection_days_after_defense)),
        ("grace period", rules.grace_period_days),
    ];
    if let Some((name, _)) = periods
        .iter()
        .find(|(_, days)| days.is_some_and(|d| d > MAX_RULE_DAYS))
    {
        return Err(AppError::Validation(format!(
            "The {} cannot exceed {} days",
            name, MAX_RULE_DAYS
        )));
    }

    Ok(())
}

fn status_rank(status: TournamentStatus) -> u8 {
    match status {
        TournamentStatus::Upcoming => 0,
        TournamentStatus::Active => 1,
        TournamentStatus::Completed => 2,
    }
}

fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    a.entry
        .tier
        .cmp(&b.entry.tier)
        .then_with(|| b.entry.prestige.cmp(&a.entry.prestige))
        .then_with(|| b.entry.wins.cmp(&a.entry.wins))
        .then_with(|| a.team_name.cmp(&b.team_name))
}
