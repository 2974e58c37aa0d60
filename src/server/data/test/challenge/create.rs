use super::*;

/// Tests inserting a new challenge with tier snapshots.
///
/// Expected: Ok with a pending challenge and no dates, result or tiers after
#[tokio::test]
async fn creates_pending_challenge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &tournament.id, 2).await?;
    let defending = factory::create_team_tournament(db, &b.id, &tournament.id, 1).await?;

    let repo = ChallengeRepository::new(db);
    let created = repo
        .create(NewChallenge {
            tournament_id: tournament.id.clone(),
            challenger_team_tournament_id: challenger.id.clone(),
            defending_team_tournament_id: defending.id.clone(),
            tier_before: SidePair {
                challenger: 2,
                defending: 1,
            },
            cast_demand: true,
            created_at: Utc::now(),
        })
        .await?;

    assert_eq!(created.status, ChallengeStatus::Pending);
    assert_eq!(created.tier_before, SidePair { challenger: 2, defending: 1 });
    assert!(created.cast_demand);
    assert!(created.proposed_dates.is_empty());
    assert!(created.result.is_none());
    assert!(created.tier_after.is_none());

    let loaded = repo.get_by_id(&created.id).await?.unwrap();
    assert_eq!(loaded.challenger_team_tournament_id, challenger.id);
    assert_eq!(loaded.defending_team_tournament_id, defending.id);

    Ok(())
}

/// Tests listing an entry's challenges in both roles, newest first.
///
/// Expected: Ok with the challenge where the entry defends listed before the older one
#[tokio::test]
async fn lists_challenges_of_entry_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;
    let third_team = factory::create_team(db).await?;
    let third =
        factory::create_team_tournament(db, &third_team.id, &matchup.tournament.id, 3).await?;

    let newer = ChallengeFactory::new(db, &third, &matchup.challenger)
        .created_at(Utc::now() + Duration::minutes(5))
        .build()
        .await?;

    let repo = ChallengeRepository::new(db);
    let listed = repo
        .list_for_team_tournament(&matchup.challenger.id)
        .await?;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[1].id, matchup.challenge.id);

    let third_listed = repo.list_for_team_tournament(&third.id).await?;
    assert_eq!(third_listed.len(), 1);

    Ok(())
}

/// Tests the monthly quota count, which ignores cancelled and older challenges.
///
/// Expected: only the non-cancelled challenge created after the cutoff counts
#[tokio::test]
async fn counts_issued_challenges_since_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;

    ChallengeFactory::new(db, &matchup.challenger, &matchup.defending)
        .status(ChallengeStatus::Cancelled)
        .build()
        .await?;
    ChallengeFactory::new(db, &matchup.challenger, &matchup.defending)
        .status(ChallengeStatus::Completed)
        .created_at(now - Duration::days(40))
        .build()
        .await?;

    let repo = ChallengeRepository::new(db);
    let issued = repo
        .count_issued_since(&matchup.challenger.id, now - Duration::days(1))
        .await?;
    assert_eq!(issued, 1);

    let issued_by_defender = repo
        .count_issued_since(&matchup.defending.id, now - Duration::days(1))
        .await?;
    assert_eq!(issued_by_defender, 0);

    Ok(())
}
