//! Team tournament factory for creating ladder entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::new_uuid;

/// Factory for creating a team's entry in a tournament ladder.
///
/// # Example
///
/// ```rust,ignore
/// let entry = TeamTournamentFactory::new(&db, &team.id, &tournament.id)
///     .tier(2)
///     .prestige(40)
///     .build()
///     .await?;
/// ```
pub struct TeamTournamentFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: String,
    tournament_id: String,
    tier: i32,
    prestige: i32,
    wins: i32,
    losses: i32,
    win_streak: i32,
    protected_until: Option<DateTime<Utc>>,
}

impl<'a> TeamTournamentFactory<'a> {
    /// Creates a factory for a fresh tier 1 entry with no record.
    pub fn new(
        db: &'a DatabaseConnection,
        team_id: impl Into<String>,
        tournament_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            team_id: team_id.into(),
            tournament_id: tournament_id.into(),
            tier: 1,
            prestige: 0,
            wins: 0,
            losses: 0,
            win_streak: 0,
            protected_until: None,
        }
    }

    pub fn tier(mut self, tier: i32) -> Self {
        self.tier = tier;
        self
    }

    pub fn prestige(mut self, prestige: i32) -> Self {
        self.prestige = prestige;
        self
    }

    /// Sets wins, losses and the current win streak.
    pub fn record(mut self, wins: i32, losses: i32, win_streak: i32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self.win_streak = win_streak;
        self
    }

    pub fn protected_until(mut self, until: Option<DateTime<Utc>>) -> Self {
        self.protected_until = until;
        self
    }

    /// Builds and inserts the entry.
    ///
    /// # Returns
    /// - `Ok(entity::team_tournament::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team_tournament::Model, DbErr> {
        entity::team_tournament::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            team_id: ActiveValue::Set(self.team_id),
            tournament_id: ActiveValue::Set(self.tournament_id),
            tier: ActiveValue::Set(self.tier),
            prestige: ActiveValue::Set(self.prestige),
            wins: ActiveValue::Set(self.wins),
            losses: ActiveValue::Set(self.losses),
            win_streak: ActiveValue::Set(self.win_streak),
            protected_until: ActiveValue::Set(self.protected_until),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entry for `team_id` in `tournament_id` at the given tier.
///
/// Shorthand for `TeamTournamentFactory::new(db, team_id, tournament_id).tier(tier).build()`.
pub async fn create_team_tournament(
    db: &DatabaseConnection,
    team_id: &str,
    tournament_id: &str,
    tier: i32,
) -> Result<entity::team_tournament::Model, DbErr> {
    TeamTournamentFactory::new(db, team_id, tournament_id)
        .tier(tier)
        .build()
        .await
}
