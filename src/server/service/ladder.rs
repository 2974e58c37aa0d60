//! Ladder math: tier movement, prestige and series validation.
//!
//! Everything here is pure so the rules can be unit tested without a database. The challenge
//! service feeds the current standings of both sides in and persists whatever comes out.

use chrono::{DateTime, Utc};
use entity::tournament::MatchFormat;

use crate::server::{
    error::AppError,
    model::{challenge::GameResult, team_tournament::TeamTournament},
    util::time::shift_days,
};

/// Prestige granted to the winner of any challenge.
pub const PRESTIGE_FOR_WIN: i32 = 10;
/// Extra prestige per tier the winner climbed over.
pub const PRESTIGE_PER_TIER_GAP: i32 = 5;
/// Prestige taken from the loser, never below zero.
pub const PRESTIGE_LOST_ON_DEFEAT: i32 = 5;

pub fn clamp_tier(tier: i32, max_tiers: i32) -> i32 {
    tier.max(1).min(max_tiers.max(1))
}

/// How many tiers below the loser the winner started. Zero when the winner ranked equal or
/// higher.
pub fn tier_gap(winner_tier: i32, loser_tier: i32) -> i32 {
    (winner_tier - loser_tier).max(0)
}

/// Games a side must take to win a series of the given format.
pub fn wins_required(format: MatchFormat) -> u32 {
    match format {
        MatchFormat::Bo1 => 1,
        MatchFormat::Bo3 => 2,
        MatchFormat::Bo5 => 3,
    }
}

/// Score recorded when a side forfeits, e.g. `2-0` for a best of three.
pub fn forfeit_score(format: MatchFormat) -> String {
    format!("{}-0", wins_required(format))
}

/// Reads a `W-L` score. Returns `None` unless both parts are numbers and `W > L`.
pub fn parse_score(score: &str) -> Option<(u32, u32)> {
    let (wins, losses) = score.trim().split_once('-')?;
    let wins = wins.trim().parse::<u32>().ok()?;
    let losses = losses.trim().parse::<u32>().ok()?;

    (wins > losses).then_some((wins, losses))
}

/// Checks a reported series against the tournament format.
///
/// The score must be written from the winner's side and the winner must have taken exactly
/// the number of games the format requires. Games are optional; when present they must
/// only name the two participants and add up to the score.
///
/// # Arguments
/// - `format` - Series length of the tournament
/// - `score` - Reported score, e.g. `2-1`
/// - `games` - Per-game results, may be empty
/// - `winner_id` - Entry reported as the series winner
/// - `loser_id` - The other participant
///
/// # Returns
/// - `Ok(())` - Series is consistent
/// - `Err(AppError::Validation)` - Score or games do not add up
pub fn validate_series(
    format: MatchFormat,
    score: &str,
    games: &[GameResult],
    winner_id: &str,
    loser_id: &str,
) -> Result<(), AppError> {
    let Some((wins, losses)) = parse_score(score) else {
        return Err(AppError::Validation(format!(
            "Score '{}' must be written as W-L with the winner's games first",
            score
        )));
    };

    let required = wins_required(format);
    if wins != required {
        return Err(AppError::Validation(format!(
            "Score '{}' does not finish a series that needs {} wins",
            score, required
        )));
    }

    if games.is_empty() {
        return Ok(());
    }

    if games.len() as u32 != wins + losses {
        return Err(AppError::Validation(format!(
            "Score '{}' does not match the {} games reported",
            score,
            games.len()
        )));
    }

    let mut winner_games = 0;
    for game in games {
        let pairing = (
            game.winner_team_tournament_id.as_str(),
            game.loser_team_tournament_id.as_str(),
        );
        if pairing == (winner_id, loser_id) {
            winner_games += 1;
        } else if pairing != (loser_id, winner_id) {
            return Err(AppError::Validation(
                "Reported games must be played between the two challenge participants".to_string(),
            ));
        }
    }

    if winner_games != wins {
        return Err(AppError::Validation(format!(
            "Games reported give the winner {} wins but the score says {}",
            winner_games, wins
        )));
    }

    Ok(())
}

/// Ladder settings that influence a result.
#[derive(Debug, Clone, Copy)]
pub struct LadderRules {
    pub max_tiers: i32,
    pub protection_days_after_defense: i32,
}

/// Updated standings of both sides and the prestige actually applied.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderOutcome {
    pub winner: TeamTournament,
    pub loser: TeamTournament,
    pub winner_prestige_delta: i32,
    /// Zero or negative; smaller in magnitude than the penalty when the floor was hit
    pub loser_prestige_delta: i32,
}

/// Applies a decided match to both standings.
///
/// An upset (winner ranked below the loser) moves the winner into the loser's tier and drops
/// the loser one tier. Otherwise tiers stay put. When the defending side wins it gains
/// protection from new challenges until `now + protection_days_after_defense`.
///
/// # Arguments
/// - `winner` - Current standing of the winning side
/// - `loser` - Current standing of the losing side
/// - `winner_was_defending` - Whether the winner was the challenged side
/// - `rules` - Ladder size and protection length
/// - `now` - Resolution time
///
/// # Returns
/// - `Ok(LadderOutcome)` - Updated standings and the prestige deltas applied
/// - `Err(AppError::InvalidState)` - Protection end falls outside the representable range
pub fn apply_result(
    winner: &TeamTournament,
    loser: &TeamTournament,
    winner_was_defending: bool,
    rules: LadderRules,
    now: DateTime<Utc>,
) -> Result<LadderOutcome, AppError> {
    let gap = tier_gap(winner.tier, loser.tier);

    let (winner_tier, loser_tier) = if gap > 0 {
        (
            clamp_tier(loser.tier, rules.max_tiers),
            clamp_tier(loser.tier + 1, rules.max_tiers),
        )
    } else {
        (
            clamp_tier(winner.tier, rules.max_tiers),
            clamp_tier(loser.tier, rules.max_tiers),
        )
    };

    let winner_prestige_delta = PRESTIGE_FOR_WIN + PRESTIGE_PER_TIER_GAP * gap;
    let loser_prestige_delta = -PRESTIGE_LOST_ON_DEFEAT.min(loser.prestige.max(0));

    let mut new_winner = winner.clone();
    new_winner.tier = winner_tier;
    new_winner.prestige = winner.prestige + winner_prestige_delta;
    new_winner.wins += 1;
    new_winner.win_streak += 1;
    if winner_was_defending {
        let until = shift_days(now, rules.protection_days_after_defense as i64).ok_or_else(|| {
            AppError::InvalidState(format!(
                "Protection of {} days runs past the supported date range",
                rules.protection_days_after_defense
            ))
        })?;
        new_winner.protected_until = Some(until);
    }

    let mut new_loser = loser.clone();
    new_loser.tier = loser_tier;
    new_loser.prestige = loser.prestige + loser_prestige_delta;
    new_loser.losses += 1;
    new_loser.win_streak = 0;

    Ok(LadderOutcome {
        winner: new_winner,
        loser: new_loser,
        winner_prestige_delta,
        loser_prestige_delta,
    })
}
