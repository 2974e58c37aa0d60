//! Maintenance scheduler.
//!
//! Sweeps every active tournament for challenges the defender never answered and forfeits
//! them on the defender's behalf once the grace period is over. A cycle runs right away on
//! start, then once a day at 2 AM server time.

use std::{sync::Arc, time::Duration as StdDuration};

use chrono::{DateTime, Local, Utc};
use futures::future::join_all;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::team_tournament::TeamTournamentRepository,
    error::AppError,
    model::{
        challenge::Challenge,
        notification::NotificationEvent,
        tournament::{Tournament, MAX_RULE_DAYS},
    },
    service::{
        challenge::ChallengeService, notification::Notifier, team::TeamService,
        tournament::TournamentService,
    },
    util::time::{duration_until_next_hour, shift_days},
};

/// Local hour at which the daily sweep runs.
const MAINTENANCE_HOUR: u32 = 2;
const DAY: StdDuration = StdDuration::from_secs(24 * 60 * 60);

/// Tunables of the maintenance sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceConfig {
    /// Grace period for tournaments without their own override
    pub default_grace_period_days: i32,
    /// Forfeit attempts per challenge before giving up for this cycle
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    /// Challenges forfeited concurrently
    pub batch_size: usize,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            default_grace_period_days: 2,
            max_retries: 3,
            retry_delay_ms: 5_000,
            batch_size: 10,
        }
    }
}

/// Partial update of [`MaintenanceConfig`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintenanceConfigUpdate {
    pub default_grace_period_days: Option<i32>,
    pub max_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub batch_size: Option<usize>,
}

/// Counters of a single sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Past-due challenges found
    pub checked: usize,
    /// Still within grace, or resolved by someone else meanwhile
    pub skipped: usize,
    pub forfeited: usize,
    /// Retries exhausted
    pub failed: usize,
}

enum ChallengeOutcome {
    Skipped,
    Forfeited,
    Failed,
}

/// Handle to the maintenance sweep. Cloning shares configuration and the running job.
#[derive(Clone)]
pub struct MaintenanceScheduler {
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    config: Arc<RwLock<MaintenanceConfig>>,
    channel_id: Arc<RwLock<Option<u64>>>,
    scheduler: Arc<Mutex<Option<JobScheduler>>>,
}

impl MaintenanceScheduler {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>, config: MaintenanceConfig) -> Self {
        Self {
            db,
            notifier,
            config: Arc::new(RwLock::new(config)),
            channel_id: Arc::new(RwLock::new(None)),
            scheduler: Arc::new(Mutex::new(None)),
        }
    }

    /// Runs a sweep now and schedules the daily sweeps.
    ///
    /// The first scheduled sweep fires at the next 2 AM local time and installs a fixed
    /// 24 hour repeat from there, so DST changes shift the run time by an hour.
    ///
    /// # Arguments
    /// - `channel_id` - Channel for forfeit summaries, keeps the current one when `None`
    ///
    /// # Returns
    /// - `Ok(())` - Jobs scheduled
    /// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
    #[tracing::instrument(skip(self))]
    pub async fn start(&self, channel_id: Option<u64>) -> Result<(), AppError> {
        if channel_id.is_some() {
            self.set_maintenance_channel(channel_id).await;
        }

        let mut running = self.scheduler.lock().await;
        if running.is_some() {
            tracing::warn!("Maintenance scheduler already running");
            return Ok(());
        }

        self.run_logged(Utc::now()).await;

        let scheduler = JobScheduler::new().await?;

        let delay = duration_until_next_hour(&Local::now(), MAINTENANCE_HOUR);
        let first_run = self.clone();
        let job = Job::new_one_shot_async(delay, move |_uuid, lock| {
            let maintenance = first_run.clone();

            Box::pin(async move {
                maintenance.run_logged(Utc::now()).await;

                let daily = maintenance.clone();
                let repeat = Job::new_repeated_async(DAY, move |_uuid, _lock| {
                    let maintenance = daily.clone();

                    Box::pin(async move {
                        maintenance.run_logged(Utc::now()).await;
                    })
                });

                match repeat {
                    Ok(job) => {
                        if let Err(e) = lock.add(job).await {
                            tracing::error!("Failed to install daily maintenance job: {}", e);
                        }
                    }
                    Err(e) => tracing::error!("Failed to create daily maintenance job: {}", e),
                }
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;
        *running = Some(scheduler);

        tracing::info!(
            "Maintenance scheduler started, next sweep in {} minutes",
            delay.as_secs() / 60
        );

        Ok(())
    }

    /// Sets or clears the channel receiving forfeit summaries.
    pub async fn set_maintenance_channel(&self, channel_id: Option<u64>) {
        *self.channel_id.write().await = channel_id;
        tracing::info!("Maintenance channel set to {:?}", channel_id);
    }

    pub async fn maintenance_channel(&self) -> Option<u64> {
        *self.channel_id.read().await
    }

    /// Applies a partial configuration update.
    ///
    /// # Returns
    /// - `Ok(MaintenanceConfig)` - Configuration after the update
    /// - `Err(AppError::Validation)` - Batch size of zero or a grace period outside
    ///   0..=`MAX_RULE_DAYS`
    pub async fn update_config(
        &self,
        update: MaintenanceConfigUpdate,
    ) -> Result<MaintenanceConfig, AppError> {
        if update.batch_size == Some(0) {
            return Err(AppError::Validation(
                "Batch size must be at least 1".to_string(),
            ));
        }
        if update
            .default_grace_period_days
            .is_some_and(|d| !(0..=MAX_RULE_DAYS).contains(&d))
        {
            return Err(AppError::Validation(format!(
                "Grace period must be between 0 and {} days",
                MAX_RULE_DAYS
            )));
        }

        let mut config = self.config.write().await;
        if let Some(days) = update.default_grace_period_days {
            config.default_grace_period_days = days;
        }
        if let Some(retries) = update.max_retries {
            config.max_retries = retries;
        }
        if let Some(delay) = update.retry_delay_ms {
            config.retry_delay_ms = delay;
        }
        if let Some(size) = update.batch_size {
            config.batch_size = size;
        }

        tracing::info!("Maintenance configuration updated: {:?}", *config);

        Ok(config.clone())
    }

    pub async fn config(&self) -> MaintenanceConfig {
        self.config.read().await.clone()
    }

    /// Runs one sweep over every active tournament.
    ///
    /// A failure listing one tournament's challenges is logged and the sweep moves on.
    ///
    /// # Returns
    /// - `Ok(CycleReport)` - Sweep finished
    /// - `Err(AppError)` - Active tournaments could not be listed
    #[tracing::instrument(skip(self))]
    pub async fn run_cycle(&self, now: DateTime<Utc>) -> Result<CycleReport, AppError> {
        let config = self.config().await;
        let tournaments = TournamentService::new(&self.db).list_active().await?;
        let challenges = ChallengeService::new(&self.db);

        let mut report = CycleReport::default();

        for tournament in &tournaments {
            let past_due = match challenges
                .get_past_due_defender_responses(&tournament.id, now)
                .await
            {
                Ok(past_due) => past_due,
                Err(e) => {
                    tracing::error!(
                        "Failed to list overdue challenges of tournament {}: {}",
                        tournament.id,
                        e
                    );
                    continue;
                }
            };

            report.checked += past_due.len();

            for batch in past_due.chunks(config.batch_size.max(1)) {
                let outcomes = join_all(
                    batch
                        .iter()
                        .map(|challenge| self.process_challenge(tournament, challenge, &config, now)),
                )
                .await;

                for outcome in outcomes {
                    match outcome {
                        ChallengeOutcome::Skipped => report.skipped += 1,
                        ChallengeOutcome::Forfeited => report.forfeited += 1,
                        ChallengeOutcome::Failed => report.failed += 1,
                    }
                }
            }
        }

        tracing::info!(
            "Maintenance sweep over {} tournaments: {} checked, {} skipped, {} forfeited, {} failed",
            tournaments.len(),
            report.checked,
            report.skipped,
            report.forfeited,
            report.failed
        );

        Ok(report)
    }

    async fn run_logged(&self, now: DateTime<Utc>) {
        if let Err(e) = self.run_cycle(now).await {
            tracing::error!("Maintenance sweep failed: {}", e);
        }
    }

    async fn process_challenge(
        &self,
        tournament: &Tournament,
        challenge: &Challenge,
        config: &MaintenanceConfig,
        now: DateTime<Utc>,
    ) -> ChallengeOutcome {
        let grace_days = tournament
            .rules
            .grace_period_days
            .unwrap_or(config.default_grace_period_days);
        let Some(grace_period_end) = shift_days(
            challenge.created_at,
            tournament.rules.challenge_timeframe_in_days as i64 + grace_days as i64,
        ) else {
            tracing::warn!(
                "Challenge {} has a response window past the supported date range; skipping",
                challenge.id
            );
            return ChallengeOutcome::Skipped;
        };

        if now < grace_period_end {
            tracing::debug!(
                "Challenge {} still within grace period until {}",
                challenge.id,
                grace_period_end
            );
            return ChallengeOutcome::Skipped;
        }

        let service = ChallengeService::new(&self.db);
        let attempts = config.max_retries.max(1);

        for attempt in 1..=attempts {
            match service
                .forfeit(&challenge.id, &challenge.defending_team_tournament_id, now)
                .await
            {
                Ok(forfeited) => {
                    tracing::info!(
                        "Auto-forfeited challenge {} for defender {}",
                        forfeited.id,
                        forfeited.defending_team_tournament_id
                    );
                    self.announce_forfeit(tournament, &forfeited).await;
                    return ChallengeOutcome::Forfeited;
                }
                Err(e) if e.is_business_rule() => {
                    tracing::warn!("Skipping auto-forfeit of challenge {}: {}", challenge.id, e);
                    return ChallengeOutcome::Skipped;
                }
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        "Auto-forfeit of challenge {} failed (attempt {}/{}): {}",
                        challenge.id,
                        attempt,
                        attempts,
                        e
                    );
                    tokio::time::sleep(StdDuration::from_millis(config.retry_delay_ms)).await;
                }
                Err(e) => {
                    tracing::error!(
                        "Giving up on auto-forfeit of challenge {} after {} attempts: {}",
                        challenge.id,
                        attempts,
                        e
                    );
                }
            }
        }

        ChallengeOutcome::Failed
    }

    /// Tells both captains and the maintenance channel about an auto-forfeit.
    ///
    /// Delivery problems are logged only; the forfeit is already committed.
    async fn announce_forfeit(&self, tournament: &Tournament, challenge: &Challenge) {
        let recipient_ids = match self.captains_of(challenge).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!(
                    "Failed to look up captains for challenge {}: {}",
                    challenge.id,
                    e
                );
                Vec::new()
            }
        };

        let score = challenge
            .result
            .as_ref()
            .map(|r| r.score.as_str())
            .unwrap_or_default();
        let message = format!(
            "Challenge {} in {} was forfeited automatically because the defending team did not \
             respond in time. The challenger wins {}.",
            challenge.id, tournament.name, score
        );

        let event = NotificationEvent {
            message: message.clone(),
            challenge_id: challenge.id.clone(),
            recipient_ids,
        };
        if let Err(e) = self.notifier.notify(&event).await {
            tracing::warn!(
                "Failed to notify captains about challenge {}: {}",
                challenge.id,
                e
            );
        }

        if let Some(channel_id) = self.maintenance_channel().await {
            if let Err(e) = self.notifier.post_to_channel(channel_id, &message).await {
                tracing::warn!(
                    "Failed to post forfeit of challenge {} to channel {}: {}",
                    challenge.id,
                    channel_id,
                    e
                );
            }
        }
    }

    async fn captains_of(&self, challenge: &Challenge) -> Result<Vec<u64>, AppError> {
        let entries = TeamTournamentRepository::new(&self.db);
        let teams = TeamService::new(&self.db);

        let mut captains = Vec::new();
        for entry_id in [
            &challenge.challenger_team_tournament_id,
            &challenge.defending_team_tournament_id,
        ] {
            let Some(entry) = entries.get_by_id(entry_id).await? else {
                continue;
            };
            if let Some(captain) = teams.get_captain(&entry.team_id).await? {
                captains.push(captain);
            }
        }

        Ok(captains)
    }
}
