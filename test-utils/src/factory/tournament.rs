//! Tournament factory for creating test tournament entities.

use chrono::{Duration, Utc};
use entity::tournament::{MatchFormat, TournamentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_uuid, next_id};

/// Factory for creating test tournaments with customizable fields.
///
/// Defaults to an active Bo3 tournament with three tiers, a 7 day challenge timeframe,
/// 3 days of protection after a defense, 4 challenges per month and 3 required date options.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::tournament::TournamentFactory;
///
/// let tournament = TournamentFactory::new(&db)
///     .challenge_timeframe_in_days(10)
///     .grace_period_days(Some(2))
///     .build()
///     .await?;
/// ```
pub struct TournamentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tournament::Model,
}

impl<'a> TournamentFactory<'a> {
    /// Creates a new TournamentFactory with default values and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();

        let entity = entity::tournament::Model {
            id: new_uuid(),
            name: format!("Tournament {}", id),
            game: "League of Legends".to_string(),
            format: MatchFormat::Bo3,
            max_tiers: 3,
            start_date: now - Duration::days(30),
            end_date: now + Duration::days(60),
            status: TournamentStatus::Active,
            challenge_timeframe_in_days: 7,
            protection_days_after_defense: 3,
            max_challenges_per_month: 4,
            min_required_date_options: 3,
            grace_period_days: None,
            reward_first: None,
            reward_second: None,
            reward_third: None,
            enforce_tier_limits: false,
            created_at: now,
        };

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn format(mut self, format: MatchFormat) -> Self {
        self.entity.format = format;
        self
    }

    pub fn max_tiers(mut self, max_tiers: i32) -> Self {
        self.entity.max_tiers = max_tiers;
        self
    }

    pub fn status(mut self, status: TournamentStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn challenge_timeframe_in_days(mut self, days: i32) -> Self {
        self.entity.challenge_timeframe_in_days = days;
        self
    }

    pub fn protection_days_after_defense(mut self, days: i32) -> Self {
        self.entity.protection_days_after_defense = days;
        self
    }

    pub fn max_challenges_per_month(mut self, max: i32) -> Self {
        self.entity.max_challenges_per_month = max;
        self
    }

    pub fn min_required_date_options(mut self, min: i32) -> Self {
        self.entity.min_required_date_options = min;
        self
    }

    /// Sets the per-tournament grace period override used by maintenance.
    pub fn grace_period_days(mut self, days: Option<i32>) -> Self {
        self.entity.grace_period_days = days;
        self
    }

    pub fn enforce_tier_limits(mut self, enforce: bool) -> Self {
        self.entity.enforce_tier_limits = enforce;
        self
    }

    /// Builds and inserts the tournament entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tournament::Model)` - Created tournament entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tournament::Model, DbErr> {
        let e = self.entity;

        entity::tournament::ActiveModel {
            id: ActiveValue::Set(e.id),
            name: ActiveValue::Set(e.name),
            game: ActiveValue::Set(e.game),
            format: ActiveValue::Set(e.format),
            max_tiers: ActiveValue::Set(e.max_tiers),
            start_date: ActiveValue::Set(e.start_date),
            end_date: ActiveValue::Set(e.end_date),
            status: ActiveValue::Set(e.status),
            challenge_timeframe_in_days: ActiveValue::Set(e.challenge_timeframe_in_days),
            protection_days_after_defense: ActiveValue::Set(e.protection_days_after_defense),
            max_challenges_per_month: ActiveValue::Set(e.max_challenges_per_month),
            min_required_date_options: ActiveValue::Set(e.min_required_date_options),
            grace_period_days: ActiveValue::Set(e.grace_period_days),
            reward_first: ActiveValue::Set(e.reward_first),
            reward_second: ActiveValue::Set(e.reward_second),
            reward_third: ActiveValue::Set(e.reward_third),
            enforce_tier_limits: ActiveValue::Set(e.enforce_tier_limits),
            created_at: ActiveValue::Set(e.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active tournament with default rules.
///
/// Shorthand for `TournamentFactory::new(db).build().await`.
pub async fn create_tournament(db: &DatabaseConnection) -> Result<entity::tournament::Model, DbErr> {
    TournamentFactory::new(db).build().await
}
