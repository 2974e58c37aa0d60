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
                    .table(ChallengeProposedDate::Table)
                    .if_not_exists()
                    .col(string(ChallengeProposedDate::ChallengeId))
                    .col(integer(ChallengeProposedDate::OptionNumber))
                    .col(timestamp_with_time_zone(ChallengeProposedDate::ProposedDate))
                    .primary_key(
                        Index::create()
                            .col(ChallengeProposedDate::ChallengeId)
                            .col(ChallengeProposedDate::OptionNumber),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_proposed_date_challenge_id")
                            .from(
                                ChallengeProposedDate::Table,
                                ChallengeProposedDate::ChallengeId,
                            )
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
            .drop_table(Table::drop().table(ChallengeProposedDate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChallengeProposedDate {
    Table,
    ChallengeId,
    OptionNumber,
    ProposedDate,
}
