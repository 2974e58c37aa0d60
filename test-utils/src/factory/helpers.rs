//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used by every factory and convenience methods that create a full
//! ladder matchup in one call.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and Discord IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID v4 string for primary keys.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Everything needed to exercise a single challenge.
pub struct Matchup {
    pub tournament: entity::tournament::Model,
    pub challenger_team: entity::team::Model,
    pub defending_team: entity::team::Model,
    pub challenger: entity::team_tournament::Model,
    pub defending: entity::team_tournament::Model,
    pub challenge: entity::challenge::Model,
}

/// Creates an active tournament, two teams entered at the given tiers, and a pending challenge
/// between them.
///
/// # Arguments
/// - `db` - Database connection
/// - `challenger_tier` - Tier the challenging team is entered at
/// - `defending_tier` - Tier the defending team is entered at
///
/// # Returns
/// - `Ok(Matchup)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_matchup(
    db: &DatabaseConnection,
    challenger_tier: i32,
    defending_tier: i32,
) -> Result<Matchup, DbErr> {
    let tournament = crate::factory::tournament::create_tournament(db).await?;

    create_matchup_in(db, tournament, challenger_tier, defending_tier).await
}

/// Same as [`create_matchup`] but inside an existing tournament.
///
/// # Arguments
/// - `db` - Database connection
/// - `tournament` - Tournament the entries and challenge belong to
/// - `challenger_tier` - Tier the challenging team is entered at
/// - `defending_tier` - Tier the defending team is entered at
///
/// # Returns
/// - `Ok(Matchup)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_matchup_in(
    db: &DatabaseConnection,
    tournament: entity::tournament::Model,
    challenger_tier: i32,
    defending_tier: i32,
) -> Result<Matchup, DbErr> {
    let challenger_team = crate::factory::team::create_team(db).await?;
    let defending_team = crate::factory::team::create_team(db).await?;

    let challenger = crate::factory::team_tournament::create_team_tournament(
        db,
        &challenger_team.id,
        &tournament.id,
        challenger_tier,
    )
    .await?;
    let defending = crate::factory::team_tournament::create_team_tournament(
        db,
        &defending_team.id,
        &tournament.id,
        defending_tier,
    )
    .await?;

    let challenge = crate::factory::challenge::create_challenge(db, &challenger, &defending).await?;

    Ok(Matchup {
        tournament,
        challenger_team,
        defending_team,
        challenger,
        defending,
        challenge,
    })
}
