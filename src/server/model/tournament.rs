//! Tournament domain models and parameters.

use chrono::{DateTime, Utc};
use entity::tournament::{MatchFormat, TournamentStatus};

/// Highest number of tiers a tournament may be configured with.
pub const MAX_TIERS_LIMIT: i32 = 16;

/// Longest period, in days, any tournament rule or grace period may span.
pub const MAX_RULE_DAYS: i32 = 3650;

/// Pyramid capacities for a ladder with `max_tiers` tiers.
///
/// Tier 1 admits a single team and every tier below admits twice as many as the one above,
/// so `tier_limits(3) == [1, 2, 4]`.
pub fn tier_limits(max_tiers: i32) -> Vec<i32> {
    (0..max_tiers.clamp(0, MAX_TIERS_LIMIT))
        .map(|i| 1 << i)
        .collect()
}

/// Rules governing challenges within a tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentRules {
    /// Days the defender has to respond before maintenance considers the challenge overdue
    pub challenge_timeframe_in_days: i32,
    pub protection_days_after_defense: i32,
    pub max_challenges_per_month: i32,
    pub min_required_date_options: i32,
    /// Overrides the maintenance default grace period when set
    pub grace_period_days: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentRewards {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub game: String,
    pub format: MatchFormat,
    pub max_tiers: i32,
    pub tier_limits: Vec<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TournamentStatus,
    pub rules: TournamentRules,
    pub rewards: TournamentRewards,
    /// Reject entries into a tier that already holds its pyramid capacity
    pub enforce_tier_limits: bool,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn from_entity(entity: entity::tournament::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            game: entity.game,
            format: entity.format,
            max_tiers: entity.max_tiers,
            tier_limits: tier_limits(entity.max_tiers),
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: entity.status,
            rules: TournamentRules {
                challenge_timeframe_in_days: entity.challenge_timeframe_in_days,
                protection_days_after_defense: entity.protection_days_after_defense,
                max_challenges_per_month: entity.max_challenges_per_month,
                min_required_date_options: entity.min_required_date_options,
                grace_period_days: entity.grace_period_days,
            },
            rewards: TournamentRewards {
                first: entity.reward_first,
                second: entity.reward_second,
                third: entity.reward_third,
            },
            enforce_tier_limits: entity.enforce_tier_limits,
            created_at: entity.created_at,
        }
    }

    /// Capacity of `tier`, or `None` when the tier is outside the ladder.
    pub fn tier_limit(&self, tier: i32) -> Option<i32> {
        if tier < 1 {
            return None;
        }
        self.tier_limits.get((tier - 1) as usize).copied()
    }
}

/// Parameters for creating a tournament.
#[derive(Debug, Clone)]
pub struct CreateTournamentParams {
    pub name: String,
    pub game: String,
    pub format: MatchFormat,
    pub max_tiers: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TournamentStatus,
    pub rules: TournamentRules,
    pub rewards: TournamentRewards,
    pub enforce_tier_limits: bool,
}
