use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_challenge_table::Challenge;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChallengeGame::Table)
                    .if_not_exists()
                    .col(string(ChallengeGame::ChallengeId))
                    .col(integer(ChallengeGame::GameNumber))
                    .col(string(ChallengeGame::WinnerTeamTournamentId))
                    .col(string(ChallengeGame::LoserTeamTournamentId))
                    .primary_key(
                        Index::create()
                            .col(ChallengeGame::ChallengeId)
                            .col(ChallengeGame::GameNumber),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_game_challenge_id")
                            .from(ChallengeGame::Table, ChallengeGame::ChallengeId)
                            .to(Challenge::Table, Challenge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChallengeGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChallengeGame {
    Table,
    ChallengeId,
    GameNumber,
    WinnerTeamTournamentId,
    LoserTeamTournamentId,
}
