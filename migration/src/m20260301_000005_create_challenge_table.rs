use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_tournament_table::Tournament,
    m20260301_000004_create_team_tournament_table::TeamTournament,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Challenge::Table)
                    .if_not_exists()
                    .col(string(Challenge::Id).primary_key())
                    .col(string(Challenge::TournamentId))
                    .col(string(Challenge::ChallengerTeamTournamentId))
                    .col(string(Challenge::DefendingTeamTournamentId))
                    .col(string_len(Challenge::Status, 16).default("pending"))
                    .col(timestamp_with_time_zone_null(Challenge::ScheduledDate))
                    .col(integer(Challenge::ChallengerTierBefore))
                    .col(integer(Challenge::DefendingTierBefore))
                    .col(integer_null(Challenge::ChallengerTierAfter))
                    .col(integer_null(Challenge::DefendingTierAfter))
                    .col(integer_null(Challenge::ChallengerPrestigeAwarded))
                    .col(integer_null(Challenge::DefendingPrestigeAwarded))
                    .col(string_null(Challenge::WinnerTeamTournamentId))
                    .col(string_null(Challenge::Score))
                    .col(string_null(Challenge::ForfeitedBy))
                    .col(text_null(Challenge::CancelReason))
                    .col(boolean(Challenge::CastDemand).default(false))
                    .col(
                        timestamp_with_time_zone(Challenge::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Challenge::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_tournament_id")
                            .from(Challenge::Table, Challenge::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_challenger_team_tournament_id")
                            .from(Challenge::Table, Challenge::ChallengerTeamTournamentId)
                            .to(TeamTournament::Table, TeamTournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_defending_team_tournament_id")
                            .from(Challenge::Table, Challenge::DefendingTeamTournamentId)
                            .to(TeamTournament::Table, TeamTournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_challenge_tournament_status")
                    .table(Challenge::Table)
                    .col(Challenge::TournamentId)
                    .col(Challenge::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Challenge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Challenge {
    Table,
    Id,
    TournamentId,
    ChallengerTeamTournamentId,
    DefendingTeamTournamentId,
    Status,
    ScheduledDate,
    ChallengerTierBefore,
    DefendingTierBefore,
    ChallengerTierAfter,
    DefendingTierAfter,
    ChallengerPrestigeAwarded,
    DefendingPrestigeAwarded,
    WinnerTeamTournamentId,
    Score,
    ForfeitedBy,
    CancelReason,
    CastDemand,
    CreatedAt,
    ResolvedAt,
}
