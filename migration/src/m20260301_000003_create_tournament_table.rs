use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(string(Tournament::Id).primary_key())
                    .col(string(Tournament::Name))
                    .col(string(Tournament::Game))
                    .col(string_len(Tournament::Format, 8))
                    .col(integer(Tournament::MaxTiers))
                    .col(timestamp_with_time_zone(Tournament::StartDate))
                    .col(timestamp_with_time_zone(Tournament::EndDate))
                    .col(string_len(Tournament::Status, 16).default("upcoming"))
                    .col(integer(Tournament::ChallengeTimeframeInDays))
                    .col(integer(Tournament::ProtectionDaysAfterDefense))
                    .col(integer(Tournament::MaxChallengesPerMonth))
                    .col(integer(Tournament::MinRequiredDateOptions))
                    .col(integer_null(Tournament::GracePeriodDays))
                    .col(string_null(Tournament::RewardFirst))
                    .col(string_null(Tournament::RewardSecond))
                    .col(string_null(Tournament::RewardThird))
                    .col(boolean(Tournament::EnforceTierLimits).default(false))
                    .col(
                        timestamp_with_time_zone(Tournament::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tournament::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tournament {
    Table,
    Id,
    Name,
    Game,
    Format,
    MaxTiers,
    StartDate,
    EndDate,
    Status,
    ChallengeTimeframeInDays,
    ProtectionDaysAfterDefense,
    MaxChallengesPerMonth,
    MinRequiredDateOptions,
    GracePeriodDays,
    RewardFirst,
    RewardSecond,
    RewardThird,
    EnforceTierLimits,
    CreatedAt,
}
