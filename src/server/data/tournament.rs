use chrono::{DateTime, Utc};
use entity::tournament::TournamentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::tournament::{CreateTournamentParams, Tournament};

pub struct TournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new tournament
    pub async fn create(
        &self,
        params: CreateTournamentParams,
        now: DateTime<Utc>,
    ) -> Result<Tournament, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            game: ActiveValue::Set(params.game),
            format: ActiveValue::Set(params.format),
            max_tiers: ActiveValue::Set(params.max_tiers),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(params.status),
            challenge_timeframe_in_days: ActiveValue::Set(params.rules.challenge_timeframe_in_days),
            protection_days_after_defense: ActiveValue::Set(
                params.rules.protection_days_after_defense,
            ),
            max_challenges_per_month: ActiveValue::Set(params.rules.max_challenges_per_month),
            min_required_date_options: ActiveValue::Set(params.rules.min_required_date_options),
            grace_period_days: ActiveValue::Set(params.rules.grace_period_days),
            reward_first: ActiveValue::Set(params.rewards.first),
            reward_second: ActiveValue::Set(params.rewards.second),
            reward_third: ActiveValue::Set(params.rewards.third),
            enforce_tier_limits: ActiveValue::Set(params.enforce_tier_limits),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Tournament::from_entity(tournament))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Tournament>, DbErr> {
        let tournament = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(tournament.map(Tournament::from_entity))
    }

    /// Gets all tournaments with `active` status, oldest first
    pub async fn list_active(&self) -> Result<Vec<Tournament>, DbErr> {
        let tournaments = entity::prelude::Tournament::find()
            .filter(entity::tournament::Column::Status.eq(TournamentStatus::Active))
            .order_by_asc(entity::tournament::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(tournaments.into_iter().map(Tournament::from_entity).collect())
    }

    /// Updates the status of a tournament and returns the updated record
    pub async fn set_status(
        &self,
        id: &str,
        status: TournamentStatus,
    ) -> Result<Tournament, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Tournament::from_entity(tournament))
    }
}
