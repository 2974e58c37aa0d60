use std::sync::Arc;

use crate::server::{
    data::challenge::ChallengeRepository,
    error::AppError,
    scheduler::maintenance::{
        CycleReport, MaintenanceConfig, MaintenanceConfigUpdate, MaintenanceScheduler,
    },
    service::notification::{recording::RecordingNotifier, Notifier},
};
use chrono::{DateTime, Duration, Utc};
use entity::{challenge::ChallengeStatus, tournament::TournamentStatus};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, challenge::ChallengeFactory, team::TeamFactory, tournament::TournamentFactory,
    },
};


/// Config with no delay between retries so failure paths run instantly.
fn fast_config() -> MaintenanceConfig {
    MaintenanceConfig {
        retry_delay_ms: 0,
        max_retries: 2,
        ..MaintenanceConfig::default()
    }
}

fn scheduler(db: &DatabaseConnection, notifier: Arc<RecordingNotifier>) -> MaintenanceScheduler {
    let notifier: Arc<dyn Notifier> = notifier;
    MaintenanceScheduler::new(db.clone(), notifier, fast_config())
}

/// A pending challenge created at `created_at` between teams captained by 111 and 222.
///
/// The tournament uses a 10 day response window and a 2 day grace period.
async fn overdue_challenge(
    db: &DatabaseConnection,
    created_at: DateTime<Utc>,
) -> Result<entity::challenge::Model, AppError> {
    let tournament = TournamentFactory::new(db)
        .challenge_timeframe_in_days(10)
        .grace_period_days(Some(2))
        .build()
        .await?;
    let challenger_team = TeamFactory::new(db).captain("111").build().await?;
    let defending_team = TeamFactory::new(db).captain("222").build().await?;
    let challenger =
        factory::create_team_tournament(db, &challenger_team.id, &tournament.id, 2).await?;
    let defending =
        factory::create_team_tournament(db, &defending_team.id, &tournament.id, 1).await?;

    Ok(ChallengeFactory::new(db, &challenger, &defending)
        .created_at(created_at)
        .build()
        .await?)
}

/// Whole-second timestamp twenty days ago.
fn twenty_days_ago() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap() - Duration::days(20)
}
