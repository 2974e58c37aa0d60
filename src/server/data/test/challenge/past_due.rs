use super::*;

/// Tests selecting pending challenges older than the response window.
///
/// Creates challenges at different ages and states in a tournament with a 7 day timeframe.
/// Only unscheduled pending challenges created at least 7 days ago qualify.
///
/// Expected: Ok with the two overdue pending challenges, oldest first
#[tokio::test]
async fn selects_overdue_pending_challenges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    let (challenger, defending) = (&matchup.challenger, &matchup.defending);

    let overdue = ChallengeFactory::new(db, challenger, defending)
        .created_at(now - Duration::days(8))
        .build()
        .await?;
    let oldest = ChallengeFactory::new(db, challenger, defending)
        .created_at(now - Duration::days(20))
        .build()
        .await?;
    // Still inside the window
    ChallengeFactory::new(db, challenger, defending)
        .created_at(now - Duration::days(6))
        .build()
        .await?;
    // Old but already scheduled
    ChallengeFactory::new(db, challenger, defending)
        .status(ChallengeStatus::Scheduled)
        .scheduled_date(Some(now + Duration::days(1)))
        .created_at(now - Duration::days(9))
        .build()
        .await?;
    // Old but cancelled
    ChallengeFactory::new(db, challenger, defending)
        .status(ChallengeStatus::Cancelled)
        .created_at(now - Duration::days(9))
        .build()
        .await?;

    let repo = ChallengeRepository::new(db);
    let past_due = repo
        .get_past_due(&matchup.tournament.id, 7, now)
        .await?;

    let ids: Vec<_> = past_due.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![oldest.id.as_str(), overdue.id.as_str()]);

    Ok(())
}

/// Tests that challenges of other tournaments are not returned.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn scoped_to_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    ChallengeFactory::new(db, &matchup.challenger, &matchup.defending)
        .created_at(now - Duration::days(30))
        .build()
        .await?;

    let other = factory::create_tournament(db).await?;

    let repo = ChallengeRepository::new(db);
    assert!(repo.get_past_due(&other.id, 7, now).await?.is_empty());

    Ok(())
}
