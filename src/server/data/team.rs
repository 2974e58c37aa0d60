use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::team::{CreateTeamParams, Team, TeamMember};

/// Role recorded for the member who creates a team.
const CAPTAIN_ROLE: &str = "captain";

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a team and its captain membership.
    ///
    /// Run inside a transaction so a failed member insert does not leave a captainless team.
    ///
    /// # Arguments
    /// - `params` - Team name, captain and optional Discord role
    /// - `now` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Team)` - Created team with its single captain member
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, params: CreateTeamParams, now: DateTime<Utc>) -> Result<Team, DbErr> {
        let team = entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            discord_role_id: ActiveValue::Set(params.discord_role_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let captain = entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id.clone()),
            discord_id: ActiveValue::Set(params.captain_discord_id.to_string()),
            role: ActiveValue::Set(CAPTAIN_ROLE.to_string()),
            is_captain: ActiveValue::Set(true),
            joined_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Team::from_entity(team, vec![captain])
    }

    /// Gets a team with its roster, members ordered by join time.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let members = team
            .find_related(entity::prelude::TeamMember)
            .order_by_asc(entity::team_member::Column::JoinedAt)
            .all(self.db)
            .await?;

        Team::from_entity(team, members).map(Some)
    }

    /// Checks whether a team with this exact name exists.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a regular member to a team.
    pub async fn add_member(
        &self,
        team_id: &str,
        discord_id: u64,
        role: String,
        now: DateTime<Utc>,
    ) -> Result<TeamMember, DbErr> {
        let member = entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id.to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            role: ActiveValue::Set(role),
            is_captain: ActiveValue::Set(false),
            joined_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        TeamMember::from_entity(member)
    }

    /// Removes a member from a team.
    ///
    /// # Returns
    /// - `Ok(true)` - Member was removed
    /// - `Ok(false)` - No such membership
    /// - `Err(DbErr)` - Database error
    pub async fn remove_member(&self, team_id: &str, discord_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamMember::delete_by_id((
            team_id.to_string(),
            discord_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the captain flag of a single membership.
    pub async fn set_captain_flag(
        &self,
        team_id: &str,
        discord_id: u64,
        is_captain: bool,
    ) -> Result<(), DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Unchanged(team_id.to_string()),
            discord_id: ActiveValue::Unchanged(discord_id.to_string()),
            is_captain: ActiveValue::Set(is_captain),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Binds or clears the Discord role of a team.
    pub async fn set_discord_role(&self, team_id: &str, role_id: Option<u64>) -> Result<(), DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::Unchanged(team_id.to_string()),
            discord_role_id: ActiveValue::Set(role_id.map(|id| id.to_string())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Gets the Discord id of a team's captain.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Captain found
    /// - `Ok(None)` - Team has no captain row (or does not exist)
    /// - `Err(DbErr)` - Database error or unparsable stored id
    pub async fn get_captain_id(&self, team_id: &str) -> Result<Option<u64>, DbErr> {
        let captain = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::IsCaptain.eq(true))
            .one(self.db)
            .await?;

        captain
            .map(|m| TeamMember::from_entity(m).map(|m| m.discord_id))
            .transpose()
    }
}
