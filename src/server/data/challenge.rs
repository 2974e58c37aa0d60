use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use entity::challenge::ChallengeStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::challenge::{Challenge, GameResult, NewChallenge, Resolution};

pub struct ChallengeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChallengeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending challenge
    pub async fn create(&self, params: NewChallenge) -> Result<Challenge, DbErr> {
        let challenge = entity::challenge::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            tournament_id: ActiveValue::Set(params.tournament_id),
            challenger_team_tournament_id: ActiveValue::Set(params.challenger_team_tournament_id),
            defending_team_tournament_id: ActiveValue::Set(params.defending_team_tournament_id),
            status: ActiveValue::Set(ChallengeStatus::Pending),
            scheduled_date: ActiveValue::Set(None),
            challenger_tier_before: ActiveValue::Set(params.tier_before.challenger),
            defending_tier_before: ActiveValue::Set(params.tier_before.defending),
            challenger_tier_after: ActiveValue::Set(None),
            defending_tier_after: ActiveValue::Set(None),
            challenger_prestige_awarded: ActiveValue::Set(None),
            defending_prestige_awarded: ActiveValue::Set(None),
            winner_team_tournament_id: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            forfeited_by: ActiveValue::Set(None),
            cancel_reason: ActiveValue::Set(None),
            cast_demand: ActiveValue::Set(params.cast_demand),
            created_at: ActiveValue::Set(params.created_at),
            resolved_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Challenge::from_entity(challenge, Vec::new(), Vec::new()))
    }

    /// Gets a challenge with its proposed dates and games
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Challenge>, DbErr> {
        let Some(challenge) = entity::prelude::Challenge::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_children(vec![challenge]).await?.pop())
    }

    /// Checks for a pending or scheduled challenge between two entries, in either direction
    pub async fn open_exists_between(&self, a: &str, b: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Challenge::find()
            .filter(entity::challenge::Column::Status.is_in(ChallengeStatus::OPEN))
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::challenge::Column::ChallengerTeamTournamentId.eq(a))
                            .add(entity::challenge::Column::DefendingTeamTournamentId.eq(b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::challenge::Column::ChallengerTeamTournamentId.eq(b))
                            .add(entity::challenge::Column::DefendingTeamTournamentId.eq(a)),
                    ),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts challenges issued by an entry since `since`, ignoring cancelled ones
    pub async fn count_issued_since(
        &self,
        challenger_team_tournament_id: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Challenge::find()
            .filter(
                entity::challenge::Column::ChallengerTeamTournamentId
                    .eq(challenger_team_tournament_id),
            )
            .filter(entity::challenge::Column::Status.ne(ChallengeStatus::Cancelled))
            .filter(entity::challenge::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Stores proposed dates numbered from 1 in the given order
    pub async fn insert_proposed_dates(
        &self,
        challenge_id: &str,
        dates: &[DateTime<Utc>],
    ) -> Result<(), DbErr> {
        let rows = dates
            .iter()
            .enumerate()
            .map(|(i, date)| entity::challenge_proposed_date::ActiveModel {
                challenge_id: ActiveValue::Set(challenge_id.to_string()),
                option_number: ActiveValue::Set(i as i32 + 1),
                proposed_date: ActiveValue::Set(*date),
            })
            .collect::<Vec<_>>();

        if rows.is_empty() {
            return Ok(());
        }

        entity::prelude::ChallengeProposedDate::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves a pending challenge to scheduled.
    ///
    /// # Returns
    /// - `Ok(true)` - Challenge was pending and is now scheduled
    /// - `Ok(false)` - Challenge was not pending, nothing written
    /// - `Err(DbErr)` - Database error
    pub async fn mark_scheduled(&self, id: &str, date: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Challenge::update_many()
            .set(entity::challenge::ActiveModel {
                status: ActiveValue::Set(ChallengeStatus::Scheduled),
                scheduled_date: ActiveValue::Set(Some(date)),
                ..Default::default()
            })
            .filter(entity::challenge::Column::Id.eq(id))
            .filter(entity::challenge::Column::Status.eq(ChallengeStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Writes a terminal state onto a challenge that is still open.
    ///
    /// The status guard makes concurrent resolutions of the same challenge mutually exclusive:
    /// only one of them sees an affected row.
    ///
    /// # Returns
    /// - `Ok(true)` - Challenge was open and is now resolved
    /// - `Ok(false)` - Challenge was already terminal, nothing written
    /// - `Err(DbErr)` - Database error
    pub async fn resolve(&self, id: &str, resolution: Resolution) -> Result<bool, DbErr> {
        let result = entity::prelude::Challenge::update_many()
            .set(entity::challenge::ActiveModel {
                status: ActiveValue::Set(resolution.status),
                winner_team_tournament_id: ActiveValue::Set(resolution.winner_team_tournament_id),
                score: ActiveValue::Set(resolution.score),
                challenger_tier_after: ActiveValue::Set(
                    resolution.tier_after.map(|t| t.challenger),
                ),
                defending_tier_after: ActiveValue::Set(resolution.tier_after.map(|t| t.defending)),
                challenger_prestige_awarded: ActiveValue::Set(
                    resolution.prestige_awarded.map(|p| p.challenger),
                ),
                defending_prestige_awarded: ActiveValue::Set(
                    resolution.prestige_awarded.map(|p| p.defending),
                ),
                forfeited_by: ActiveValue::Set(resolution.forfeited_by),
                cancel_reason: ActiveValue::Set(resolution.cancel_reason),
                resolved_at: ActiveValue::Set(Some(resolution.resolved_at)),
                ..Default::default()
            })
            .filter(entity::challenge::Column::Id.eq(id))
            .filter(entity::challenge::Column::Status.is_in(ChallengeStatus::OPEN))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores the per-game results of a series, numbered from 1
    pub async fn insert_games(&self, challenge_id: &str, games: &[GameResult]) -> Result<(), DbErr> {
        if games.is_empty() {
            return Ok(());
        }

        let rows = games
            .iter()
            .enumerate()
            .map(|(i, game)| entity::challenge_game::ActiveModel {
                challenge_id: ActiveValue::Set(challenge_id.to_string()),
                game_number: ActiveValue::Set(i as i32 + 1),
                winner_team_tournament_id: ActiveValue::Set(game.winner_team_tournament_id.clone()),
                loser_team_tournament_id: ActiveValue::Set(game.loser_team_tournament_id.clone()),
            })
            .collect::<Vec<_>>();

        entity::prelude::ChallengeGame::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets pending challenges of a tournament whose response window has elapsed.
    ///
    /// A challenge qualifies when it has no scheduled date, no winner, and was created at
    /// least `timeframe_days` before `now`. Oldest first.
    pub async fn get_past_due(
        &self,
        tournament_id: &str,
        timeframe_days: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Challenge>, DbErr> {
        // A window reaching back past the calendar's start cannot have elapsed yet
        let Some(cutoff) = Duration::try_days(timeframe_days as i64)
            .and_then(|window| now.checked_sub_signed(window))
        else {
            return Ok(Vec::new());
        };

        let challenges = entity::prelude::Challenge::find()
            .filter(entity::challenge::Column::TournamentId.eq(tournament_id))
            .filter(entity::challenge::Column::Status.eq(ChallengeStatus::Pending))
            .filter(entity::challenge::Column::ScheduledDate.is_null())
            .filter(entity::challenge::Column::WinnerTeamTournamentId.is_null())
            .filter(entity::challenge::Column::CreatedAt.lte(cutoff))
            .order_by_asc(entity::challenge::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_children(challenges).await
    }

    /// Gets every challenge an entry took part in, newest first
    pub async fn list_for_team_tournament(
        &self,
        team_tournament_id: &str,
    ) -> Result<Vec<Challenge>, DbErr> {
        let challenges = entity::prelude::Challenge::find()
            .filter(
                Condition::any()
                    .add(
                        entity::challenge::Column::ChallengerTeamTournamentId
                            .eq(team_tournament_id),
                    )
                    .add(entity::challenge::Column::DefendingTeamTournamentId.eq(team_tournament_id)),
            )
            .order_by_desc(entity::challenge::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_children(challenges).await
    }

    /// Loads proposed dates and games for a set of challenge rows with one query each
    async fn with_children(
        &self,
        challenges: Vec<entity::challenge::Model>,
    ) -> Result<Vec<Challenge>, DbErr> {
        if challenges.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = challenges.iter().map(|c| c.id.clone()).collect();

        let mut dates: HashMap<String, Vec<entity::challenge_proposed_date::Model>> =
            HashMap::new();
        for date in entity::prelude::ChallengeProposedDate::find()
            .filter(entity::challenge_proposed_date::Column::ChallengeId.is_in(ids.clone()))
            .all(self.db)
            .await?
        {
            dates.entry(date.challenge_id.clone()).or_default().push(date);
        }

        let mut games: HashMap<String, Vec<entity::challenge_game::Model>> = HashMap::new();
        for game in entity::prelude::ChallengeGame::find()
            .filter(entity::challenge_game::Column::ChallengeId.is_in(ids))
            .all(self.db)
            .await?
        {
            games.entry(game.challenge_id.clone()).or_default().push(game);
        }

        Ok(challenges
            .into_iter()
            .map(|c| {
                let challenge_dates = dates.remove(&c.id).unwrap_or_default();
                let challenge_games = games.remove(&c.id).unwrap_or_default();
                Challenge::from_entity(c, challenge_dates, challenge_games)
            })
            .collect())
    }
}
