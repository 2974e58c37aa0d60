//! Team domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// A single member of a team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    /// Discord user id
    pub discord_id: u64,
    /// In-game role, free text
    pub role: String,
    pub is_captain: bool,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Converted member
    /// - `Err(DbErr::Custom)` - Stored discord id is not a valid u64
    pub fn from_entity(entity: entity::team_member::Model) -> Result<Self, DbErr> {
        let discord_id = entity
            .discord_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse discord_id: {}", e)))?;

        Ok(Self {
            discord_id,
            role: entity.role,
            is_captain: entity.is_captain,
            joined_at: entity.joined_at,
        })
    }
}

/// A team with its roster.
///
/// Exactly one member has `is_captain` set.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub discord_role_id: Option<u64>,
    pub members: Vec<TeamMember>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Converts a team entity and its member rows to a domain model.
    ///
    /// # Arguments
    /// - `entity` - Team row
    /// - `members` - Member rows belonging to the team
    ///
    /// # Returns
    /// - `Ok(Team)` - Converted team
    /// - `Err(DbErr::Custom)` - A stored discord id is not a valid u64
    pub fn from_entity(
        entity: entity::team::Model,
        members: Vec<entity::team_member::Model>,
    ) -> Result<Self, DbErr> {
        let discord_role_id = entity
            .discord_role_id
            .map(|id| {
                id.parse::<u64>()
                    .map_err(|e| DbErr::Custom(format!("Failed to parse discord_role_id: {}", e)))
            })
            .transpose()?;

        let members = members
            .into_iter()
            .map(TeamMember::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            discord_role_id,
            members,
            created_at: entity.created_at,
        })
    }

    pub fn captain(&self) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.is_captain)
    }

    pub fn is_captain(&self, discord_id: u64) -> bool {
        self.captain().is_some_and(|c| c.discord_id == discord_id)
    }

    pub fn has_member(&self, discord_id: u64) -> bool {
        self.members.iter().any(|m| m.discord_id == discord_id)
    }
}

/// Parameters for creating a team. The creator becomes captain.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub captain_discord_id: u64,
    pub discord_role_id: Option<u64>,
}
