use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_team_table::Team,
    m20260301_000003_create_tournament_table::Tournament,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamTournament::Table)
                    .if_not_exists()
                    .col(string(TeamTournament::Id).primary_key())
                    .col(string(TeamTournament::TeamId))
                    .col(string(TeamTournament::TournamentId))
                    .col(integer(TeamTournament::Tier))
                    .col(integer(TeamTournament::Prestige).default(0))
                    .col(integer(TeamTournament::Wins).default(0))
                    .col(integer(TeamTournament::Losses).default(0))
                    .col(integer(TeamTournament::WinStreak).default(0))
                    .col(timestamp_with_time_zone_null(TeamTournament::ProtectedUntil))
                    .col(
                        timestamp_with_time_zone(TeamTournament::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_tournament_team_id")
                            .from(TeamTournament::Table, TeamTournament::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_tournament_tournament_id")
                            .from(TeamTournament::Table, TeamTournament::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_team_tournament_unique")
                            .col(TeamTournament::TeamId)
                            .col(TeamTournament::TournamentId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamTournament::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamTournament {
    Table,
    Id,
    TeamId,
    TournamentId,
    Tier,
    Prestige,
    Wins,
    Losses,
    WinStreak,
    ProtectedUntil,
    JoinedAt,
}
