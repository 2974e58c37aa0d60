//! Challenge factory for creating test challenges between ladder entries.
//!
//! Tier snapshots are taken from the entries passed in, mirroring what challenge creation does
//! in the application.

use chrono::{DateTime, Utc};
use entity::challenge::ChallengeStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::new_uuid;

/// Factory for creating test challenges.
///
/// # Example
///
/// ```rust,ignore
/// let challenge = ChallengeFactory::new(&db, &challenger, &defending)
///     .created_at(now - Duration::days(12))
///     .build()
///     .await?;
/// ```
pub struct ChallengeFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::challenge::Model,
}

impl<'a> ChallengeFactory<'a> {
    /// Creates a factory for a pending challenge created now.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `challenger` - Entry issuing the challenge
    /// - `defending` - Entry being challenged
    pub fn new(
        db: &'a DatabaseConnection,
        challenger: &entity::team_tournament::Model,
        defending: &entity::team_tournament::Model,
    ) -> Self {
        let entity = entity::challenge::Model {
            id: new_uuid(),
            tournament_id: challenger.tournament_id.clone(),
            challenger_team_tournament_id: challenger.id.clone(),
            defending_team_tournament_id: defending.id.clone(),
            status: ChallengeStatus::Pending,
            scheduled_date: None,
            challenger_tier_before: challenger.tier,
            defending_tier_before: defending.tier,
            challenger_tier_after: None,
            defending_tier_after: None,
            challenger_prestige_awarded: None,
            defending_prestige_awarded: None,
            winner_team_tournament_id: None,
            score: None,
            forfeited_by: None,
            cancel_reason: None,
            cast_demand: false,
            created_at: Utc::now(),
            resolved_at: None,
        };

        Self { db, entity }
    }

    pub fn status(mut self, status: ChallengeStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    pub fn scheduled_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.entity.scheduled_date = date;
        self
    }

    pub fn cast_demand(mut self, cast_demand: bool) -> Self {
        self.entity.cast_demand = cast_demand;
        self
    }

    /// Builds and inserts the challenge.
    ///
    /// # Returns
    /// - `Ok(entity::challenge::Model)` - Created challenge
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::challenge::Model, DbErr> {
        let e = self.entity;

        entity::challenge::ActiveModel {
            id: ActiveValue::Set(e.id),
            tournament_id: ActiveValue::Set(e.tournament_id),
            challenger_team_tournament_id: ActiveValue::Set(e.challenger_team_tournament_id),
            defending_team_tournament_id: ActiveValue::Set(e.defending_team_tournament_id),
            status: ActiveValue::Set(e.status),
            scheduled_date: ActiveValue::Set(e.scheduled_date),
            challenger_tier_before: ActiveValue::Set(e.challenger_tier_before),
            defending_tier_before: ActiveValue::Set(e.defending_tier_before),
            challenger_tier_after: ActiveValue::Set(e.challenger_tier_after),
            defending_tier_after: ActiveValue::Set(e.defending_tier_after),
            challenger_prestige_awarded: ActiveValue::Set(e.challenger_prestige_awarded),
            defending_prestige_awarded: ActiveValue::Set(e.defending_prestige_awarded),
            winner_team_tournament_id: ActiveValue::Set(e.winner_team_tournament_id),
            score: ActiveValue::Set(e.score),
            forfeited_by: ActiveValue::Set(e.forfeited_by),
            cancel_reason: ActiveValue::Set(e.cancel_reason),
            cast_demand: ActiveValue::Set(e.cast_demand),
            created_at: ActiveValue::Set(e.created_at),
            resolved_at: ActiveValue::Set(e.resolved_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending challenge between two entries.
///
/// Shorthand for `ChallengeFactory::new(db, challenger, defending).build().await`.
pub async fn create_challenge(
    db: &DatabaseConnection,
    challenger: &entity::team_tournament::Model,
    defending: &entity::team_tournament::Model,
) -> Result<entity::challenge::Model, DbErr> {
    ChallengeFactory::new(db, challenger, defending).build().await
}
