use sea_orm::entity::prelude::*;

/// Lifecycle status of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ChallengeStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "forfeited")]
    Forfeited,
}

impl ChallengeStatus {
    /// Statuses a challenge can still be resolved from.
    pub const OPEN: [ChallengeStatus; 2] = [ChallengeStatus::Pending, ChallengeStatus::Scheduled];

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ChallengeStatus::Completed | ChallengeStatus::Cancelled | ChallengeStatus::Forfeited
        )
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "challenge")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub tournament_id: String,
    pub challenger_team_tournament_id: String,
    pub defending_team_tournament_id: String,
    pub status: ChallengeStatus,
    pub scheduled_date: Option<ChronoDateTimeUtc>,
    pub challenger_tier_before: i32,
    pub defending_tier_before: i32,
    pub challenger_tier_after: Option<i32>,
    pub defending_tier_after: Option<i32>,
    pub challenger_prestige_awarded: Option<i32>,
    pub defending_prestige_awarded: Option<i32>,
    pub winner_team_tournament_id: Option<String>,
    pub score: Option<String>,
    pub forfeited_by: Option<String>,
    pub cancel_reason: Option<String>,
    pub cast_demand: bool,
    pub created_at: ChronoDateTimeUtc,
    pub resolved_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::team_tournament::Entity",
        from = "Column::ChallengerTeamTournamentId",
        to = "super::team_tournament::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Challenger,
    #[sea_orm(
        belongs_to = "super::team_tournament::Entity",
        from = "Column::DefendingTeamTournamentId",
        to = "super::team_tournament::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Defending,
    #[sea_orm(has_many = "super::challenge_proposed_date::Entity")]
    ChallengeProposedDate,
    #[sea_orm(has_many = "super::challenge_game::Entity")]
    ChallengeGame,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::challenge_proposed_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeProposedDate.def()
    }
}

impl Related<super::challenge_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
