use super::*;
use crate::server::model::reference::Ref;

/// Tests issuing a challenge between two entries of an active tournament.
///
/// Expected: Ok with a pending challenge carrying both tier snapshots
#[tokio::test]
async fn creates_challenge_with_tier_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &tournament.id, 3).await?;
    let defending = factory::create_team_tournament(db, &b.id, &tournament.id, 2).await?;

    let service = ChallengeService::new(db);
    let challenge = service
        .create(
            CreateChallengeParams {
                challenger: challenger.id.as_str().into(),
                defending: defending.id.as_str().into(),
                cast_demand: true,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(challenge.status, ChallengeStatus::Pending);
    assert_eq!(challenge.tournament_id, tournament.id);
    assert_eq!(challenge.tier_before.challenger, 3);
    assert_eq!(challenge.tier_before.defending, 2);
    assert!(challenge.cast_demand);

    Ok(())
}

/// Tests that a team cannot challenge itself.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_self_challenge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let team = factory::create_team(db).await?;
    let entry = factory::create_team_tournament(db, &team.id, &tournament.id, 1).await?;

    let result = ChallengeService::new(db)
        .create(
            CreateChallengeParams {
                challenger: entry.id.as_str().into(),
                defending: entry.id.as_str().into(),
                cast_demand: false,
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that entries from different tournaments cannot face each other.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_cross_tournament_challenge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tournament(db).await?;
    let second = factory::create_tournament(db).await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &first.id, 2).await?;
    let defending = factory::create_team_tournament(db, &b.id, &second.id, 1).await?;

    let result = ChallengeService::new(db)
        .create(
            CreateChallengeParams {
                challenger: challenger.id.as_str().into(),
                defending: defending.id.as_str().into(),
                cast_demand: false,
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a defender under post-defense protection cannot be challenged.
///
/// Expected: Err(AppError::InvalidState) while protected, Ok once protection lapses
#[tokio::test]
async fn respects_defender_protection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tournament = factory::create_tournament(db).await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &tournament.id, 2).await?;
    let defending = TeamTournamentFactory::new(db, &b.id, &tournament.id)
        .tier(1)
        .protected_until(Some(now + Duration::days(2)))
        .build()
        .await?;

    let service = ChallengeService::new(db);
    let params = || CreateChallengeParams {
        challenger: challenger.id.as_str().into(),
        defending: defending.id.as_str().into(),
        cast_demand: false,
    };

    let blocked = service.create(params(), now).await;
    assert!(matches!(blocked, Err(AppError::InvalidState(_))));

    let later = service.create(params(), now + Duration::days(3)).await?;
    assert_eq!(later.status, ChallengeStatus::Pending);

    Ok(())
}

/// Tests that already loaded entries are refreshed before the protection check.
///
/// The defender is loaded, then wins protection and climbs a tier in the database. Handing
/// the stale copy to the service must not bypass either change.
///
/// Expected: Err(AppError::InvalidState) while protected, then a tier snapshot of 1
#[tokio::test]
async fn refreshes_loaded_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tournament = factory::create_tournament(db).await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &tournament.id, 3).await?;
    let defending = factory::create_team_tournament(db, &b.id, &tournament.id, 2).await?;

    let stale = entry(db, &defending.id).await?;
    let mut current = stale.clone();
    current.tier = 1;
    current.protected_until = Some(now + Duration::days(2));
    TeamTournamentRepository::new(db)
        .update_standing(&current)
        .await?;

    let service = ChallengeService::new(db);
    let params = || CreateChallengeParams {
        challenger: challenger.id.as_str().into(),
        defending: Ref::Resolved(stale.clone()),
        cast_demand: false,
    };

    let blocked = service.create(params(), now).await;
    assert!(matches!(blocked, Err(AppError::InvalidState(_))));

    let later = service.create(params(), now + Duration::days(3)).await?;
    assert_eq!(later.tier_before.defending, 1);

    Ok(())
}

/// Tests the monthly challenge quota of the challenger.
///
/// Uses a tournament allowing two challenges per month. Two issued challenges exhaust it,
/// a cancelled one does not count.
///
/// Expected: third challenge rejected with Err(AppError::InvalidState)
#[tokio::test]
async fn enforces_monthly_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tournament = TournamentFactory::new(db)
        .max_challenges_per_month(2)
        .build()
        .await?;

    let mut entries = Vec::new();
    for tier in [3, 2, 2, 1] {
        let team = factory::create_team(db).await?;
        entries.push(factory::create_team_tournament(db, &team.id, &tournament.id, tier).await?);
    }
    let challenger = &entries[0];

    ChallengeFactory::new(db, challenger, &entries[1])
        .status(ChallengeStatus::Cancelled)
        .created_at(now)
        .build()
        .await?;

    let service = ChallengeService::new(db);
    let issue = |defending: &entity::team_tournament::Model| CreateChallengeParams {
        challenger: challenger.id.as_str().into(),
        defending: defending.id.as_str().into(),
        cast_demand: false,
    };

    service.create(issue(&entries[1]), now).await?;
    service.create(issue(&entries[2]), now).await?;
    let third = service.create(issue(&entries[3]), now).await;

    assert!(matches!(third, Err(AppError::InvalidState(_))));

    Ok(())
}

/// Tests that only one open challenge can exist between a pair, in either direction.
///
/// Expected: Err(AppError::InvalidState) for the reverse challenge
#[tokio::test]
async fn rejects_duplicate_open_challenge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;

    let result = ChallengeService::new(db)
        .create(
            CreateChallengeParams {
                challenger: matchup.defending.id.as_str().into(),
                defending: matchup.challenger.id.as_str().into(),
                cast_demand: false,
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));

    Ok(())
}

/// Tests that challenges can only be issued in active tournaments.
///
/// Expected: Err(AppError::InvalidState)
#[tokio::test]
async fn rejects_inactive_tournament() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = TournamentFactory::new(db)
        .status(entity::tournament::TournamentStatus::Upcoming)
        .build()
        .await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &tournament.id, 2).await?;
    let defending = factory::create_team_tournament(db, &b.id, &tournament.id, 1).await?;

    let result = ChallengeService::new(db)
        .create(
            CreateChallengeParams {
                challenger: challenger.id.as_str().into(),
                defending: defending.id.as_str().into(),
                cast_demand: false,
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));

    Ok(())
}

/// Tests that an unknown entry id is reported as missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let team = factory::create_team(db).await?;
    let entry = factory::create_team_tournament(db, &team.id, &tournament.id, 1).await?;

    let result = ChallengeService::new(db)
        .create(
            CreateChallengeParams {
                challenger: "missing".into(),
                defending: entry.id.as_str().into(),
                cast_demand: false,
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
