use sea_orm::entity::prelude::*;

/// Lifecycle status of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TournamentStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Series length played for every challenge in a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum MatchFormat {
    #[sea_orm(string_value = "bo1")]
    Bo1,
    #[sea_orm(string_value = "bo3")]
    Bo3,
    #[sea_orm(string_value = "bo5")]
    Bo5,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub game: String,
    pub format: MatchFormat,
    pub max_tiers: i32,
    pub start_date: ChronoDateTimeUtc,
    pub end_date: ChronoDateTimeUtc,
    pub status: TournamentStatus,
    pub challenge_timeframe_in_days: i32,
    pub protection_days_after_defense: i32,
    pub max_challenges_per_month: i32,
    pub min_required_date_options: i32,
    /// Overrides the scheduler's default grace period when set
    pub grace_period_days: Option<i32>,
    pub reward_first: Option<String>,
    pub reward_second: Option<String>,
    pub reward_third: Option<String>,
    pub enforce_tier_limits: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_tournament::Entity")]
    TeamTournament,
    #[sea_orm(has_many = "super::challenge::Entity")]
    Challenge,
}

impl Related<super::team_tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamTournament.def()
    }
}

impl Related<super::challenge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
