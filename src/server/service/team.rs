use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{CreateTeamParams, Team},
};

/// Longest team name accepted.
const MAX_TEAM_NAME_LEN: usize = 64;

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team with its creator as captain.
    ///
    /// # Returns
    /// - `Ok(Team)` - The new team
    /// - `Err(AppError::Validation)` - Name empty or too long
    /// - `Err(AppError::InvalidState)` - Name already taken
    pub async fn create(&self, params: CreateTeamParams, now: DateTime<Utc>) -> Result<Team, AppError> {
        let name = params.name.trim().to_string();
        if name.is_empty() || name.chars().count() > MAX_TEAM_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Team name must be between 1 and {} characters",
                MAX_TEAM_NAME_LEN
            )));
        }

        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        if repo.name_exists(&name).await? {
            return Err(AppError::InvalidState(format!(
                "A team named {} already exists",
                name
            )));
        }

        let team = repo.create(CreateTeamParams { name, ..params }, now).await?;
        txn.commit().await?;

        tracing::info!("Team {} ({}) created", team.name, team.id);

        Ok(team)
    }

    pub async fn get_by_id(&self, team_id: &str) -> Result<Option<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_by_id(team_id).await?)
    }

    /// Adds a member to a team. Only the captain or an admin may do this.
    ///
    /// # Returns
    /// - `Ok(Team)` - Updated roster
    /// - `Err(AppError::Forbidden)` - Actor is neither captain nor admin
    /// - `Err(AppError::InvalidState)` - User already on the team
    pub async fn add_member(
        &self,
        team_id: &str,
        actor_discord_id: u64,
        discord_id: u64,
        role: &str,
        actor_is_admin: bool,
        now: DateTime<Utc>,
    ) -> Result<Team, AppError> {
        let team = self.require_team(team_id).await?;
        authorize(&team, actor_discord_id, actor_is_admin)?;

        if team.has_member(discord_id) {
            return Err(AppError::InvalidState(format!(
                "<@{}> is already on {}",
                discord_id, team.name
            )));
        }

        TeamRepository::new(self.db)
            .add_member(team_id, discord_id, role.trim().to_string(), now)
            .await?;

        tracing::info!("{} joined team {}", discord_id, team.id);

        self.require_team(team_id).await
    }

    /// Removes a non-captain member from a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - Updated roster
    /// - `Err(AppError::Forbidden)` - Actor is neither captain nor admin
    /// - `Err(AppError::NotFound)` - User is not on the team
    /// - `Err(AppError::InvalidState)` - Target is the captain
    pub async fn remove_member(
        &self,
        team_id: &str,
        actor_discord_id: u64,
        discord_id: u64,
        actor_is_admin: bool,
    ) -> Result<Team, AppError> {
        let team = self.require_team(team_id).await?;
        authorize(&team, actor_discord_id, actor_is_admin)?;

        if !team.has_member(discord_id) {
            return Err(AppError::NotFound(format!(
                "<@{}> is not on {}",
                discord_id, team.name
            )));
        }
        if team.is_captain(discord_id) {
            return Err(AppError::InvalidState(
                "The captain cannot be removed, transfer the captaincy first".to_string(),
            ));
        }

        TeamRepository::new(self.db)
            .remove_member(team_id, discord_id)
            .await?;

        tracing::info!("{} removed from team {}", discord_id, team.id);

        self.require_team(team_id).await
    }

    /// Hands the captaincy to another member. Both flags flip in one transaction.
    ///
    /// # Returns
    /// - `Ok(Team)` - Team with its new captain
    /// - `Err(AppError::Forbidden)` - Actor is neither captain nor admin
    /// - `Err(AppError::Validation)` - Target is not a member
    pub async fn transfer_captain(
        &self,
        team_id: &str,
        actor_discord_id: u64,
        new_captain_discord_id: u64,
        actor_is_admin: bool,
    ) -> Result<Team, AppError> {
        let team = self.require_team(team_id).await?;
        authorize(&team, actor_discord_id, actor_is_admin)?;

        if !team.has_member(new_captain_discord_id) {
            return Err(AppError::Validation(format!(
                "<@{}> must join {} before becoming captain",
                new_captain_discord_id, team.name
            )));
        }
        if team.is_captain(new_captain_discord_id) {
            return Ok(team);
        }

        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        for member in team.members.iter().filter(|m| m.is_captain) {
            repo.set_captain_flag(team_id, member.discord_id, false)
                .await?;
        }
        repo.set_captain_flag(team_id, new_captain_discord_id, true)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Captaincy of team {} transferred to {}",
            team.id,
            new_captain_discord_id
        );

        self.require_team(team_id).await
    }

    /// Binds or clears the Discord role associated with a team.
    pub async fn set_discord_role(
        &self,
        team_id: &str,
        actor_discord_id: u64,
        role_id: Option<u64>,
        actor_is_admin: bool,
    ) -> Result<Team, AppError> {
        let team = self.require_team(team_id).await?;
        authorize(&team, actor_discord_id, actor_is_admin)?;

        TeamRepository::new(self.db)
            .set_discord_role(team_id, role_id)
            .await?;

        self.require_team(team_id).await
    }

    /// Discord id of a team's captain.
    pub async fn get_captain(&self, team_id: &str) -> Result<Option<u64>, AppError> {
        Ok(TeamRepository::new(self.db).get_captain_id(team_id).await?)
    }

    async fn require_team(&self, team_id: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
    }
}

fn authorize(team: &Team, actor_discord_id: u64, actor_is_admin: bool) -> Result<(), AppError> {
    if actor_is_admin || team.is_captain(actor_discord_id) {
        return Ok(());
    }

    Err(AppError::Forbidden(format!(
        "Only the captain of {} or an admin can manage the team",
        team.name
    )))
}
