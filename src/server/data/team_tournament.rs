use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::team_tournament::{Standing, TeamTournament};

pub struct TeamTournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamTournamentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Enters a team into a tournament at the given tier with a clean record.
    ///
    /// # Arguments
    /// - `team_id` - Team being entered
    /// - `tournament_id` - Tournament the team joins
    /// - `tier` - Starting tier, already validated against the ladder size
    /// - `now` - Join timestamp
    ///
    /// # Returns
    /// - `Ok(TeamTournament)` - The new entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        team_id: &str,
        tournament_id: &str,
        tier: i32,
        now: DateTime<Utc>,
    ) -> Result<TeamTournament, DbErr> {
        let entry = entity::team_tournament::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            team_id: ActiveValue::Set(team_id.to_string()),
            tournament_id: ActiveValue::Set(tournament_id.to_string()),
            tier: ActiveValue::Set(tier),
            prestige: ActiveValue::Set(0),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            win_streak: ActiveValue::Set(0),
            protected_until: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(TeamTournament::from_entity(entry))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TeamTournament>, DbErr> {
        let entry = entity::prelude::TeamTournament::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entry.map(TeamTournament::from_entity))
    }

    /// Finds the entry of a team in a tournament, if it joined.
    pub async fn find_by_team_and_tournament(
        &self,
        team_id: &str,
        tournament_id: &str,
    ) -> Result<Option<TeamTournament>, DbErr> {
        let entry = entity::prelude::TeamTournament::find()
            .filter(entity::team_tournament::Column::TeamId.eq(team_id))
            .filter(entity::team_tournament::Column::TournamentId.eq(tournament_id))
            .one(self.db)
            .await?;

        Ok(entry.map(TeamTournament::from_entity))
    }

    /// Counts entries currently sitting in `tier` of a tournament.
    pub async fn count_in_tier(&self, tournament_id: &str, tier: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamTournament::find()
            .filter(entity::team_tournament::Column::TournamentId.eq(tournament_id))
            .filter(entity::team_tournament::Column::Tier.eq(tier))
            .count(self.db)
            .await
    }

    /// Gets every entry of a tournament together with its team name.
    ///
    /// Rows are returned unordered; ranking is a service concern.
    pub async fn get_with_team_names(&self, tournament_id: &str) -> Result<Vec<Standing>, DbErr> {
        let rows = entity::prelude::TeamTournament::find()
            .filter(entity::team_tournament::Column::TournamentId.eq(tournament_id))
            .find_also_related(entity::prelude::Team)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(entry, team)| Standing {
                team_name: team.map(|t| t.name).unwrap_or_default(),
                entry: TeamTournament::from_entity(entry),
            })
            .collect())
    }

    /// Writes the ladder fields of an entry (tier, prestige, record, protection).
    pub async fn update_standing(&self, entry: &TeamTournament) -> Result<(), DbErr> {
        entity::team_tournament::ActiveModel {
            id: ActiveValue::Unchanged(entry.id.clone()),
            tier: ActiveValue::Set(entry.tier),
            prestige: ActiveValue::Set(entry.prestige),
            wins: ActiveValue::Set(entry.wins),
            losses: ActiveValue::Set(entry.losses),
            win_streak: ActiveValue::Set(entry.win_streak),
            protected_until: ActiveValue::Set(entry.protected_until),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
