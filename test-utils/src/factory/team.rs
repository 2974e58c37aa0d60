//! Team factory for creating test team entities.
//!
//! Every team is created together with a captain membership row so that captain lookups work
//! out of the box.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_uuid, next_id};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db)
///     .name("Blue Side")
///     .captain("123456789")
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    captain_discord_id: String,
    discord_role_id: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with a unique name and captain Discord ID.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TeamFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            name: format!("Team {}", id),
            captain_discord_id: format!("{}", 100_000_000 + id),
            discord_role_id: None,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the Discord ID of the captain membership created with the team.
    pub fn captain(mut self, discord_id: impl Into<String>) -> Self {
        self.captain_discord_id = discord_id.into();
        self
    }

    /// Sets the Discord role bound to the team.
    pub fn discord_role_id(mut self, role_id: Option<String>) -> Self {
        self.discord_role_id = role_id;
        self
    }

    /// Builds and inserts the team and its captain membership.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();

        let team = entity::team::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            discord_role_id: ActiveValue::Set(self.discord_role_id),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id.clone()),
            discord_id: ActiveValue::Set(self.captain_discord_id),
            role: ActiveValue::Set("captain".to_string()),
            is_captain: ActiveValue::Set(true),
            joined_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(team)
    }
}

/// Creates a team with default values and a captain.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

/// Adds a non-captain member to an existing team.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the member joins
/// - `discord_id` - Discord ID of the member
///
/// # Returns
/// - `Ok(entity::team_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team_member(
    db: &DatabaseConnection,
    team_id: &str,
    discord_id: impl Into<String>,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        team_id: ActiveValue::Set(team_id.to_string()),
        discord_id: ActiveValue::Set(discord_id.into()),
        role: ActiveValue::Set("player".to_string()),
        is_captain: ActiveValue::Set(false),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
