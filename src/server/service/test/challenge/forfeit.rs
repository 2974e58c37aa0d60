use super::*;

/// Tests a challenger forfeiting: the defender wins by the forfeit score.
///
/// Expected: status forfeited, score "2-0" for Bo3, defender protected
#[tokio::test]
async fn challenger_forfeit_counts_as_defense() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    let (c, d) = (&matchup.challenger.id, &matchup.defending.id);

    let challenge = ChallengeService::new(db)
        .forfeit(&matchup.challenge.id, c, now)
        .await?;

    assert_eq!(challenge.status, ChallengeStatus::Forfeited);
    assert_eq!(challenge.forfeited_by.as_deref(), Some(c.as_str()));
    let result = challenge.result.unwrap();
    assert_eq!(result.winner_team_tournament_id, *d);
    assert_eq!(result.score, "2-0");

    let defender = entry(db, d).await?;
    assert_eq!(defender.tier, 1);
    assert_eq!(defender.wins, 1);
    assert!(defender.protected_until.is_some());

    Ok(())
}

/// Tests a defender forfeiting in a Bo1 tournament.
///
/// Expected: score "1-0" and the challenger takes the defender's tier
#[tokio::test]
async fn defender_forfeit_moves_challenger_up() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = TournamentFactory::new(db)
        .format(MatchFormat::Bo1)
        .build()
        .await?;
    let a = factory::create_team(db).await?;
    let b = factory::create_team(db).await?;
    let challenger = factory::create_team_tournament(db, &a.id, &tournament.id, 3).await?;
    let defending = factory::create_team_tournament(db, &b.id, &tournament.id, 2).await?;
    let challenge = factory::create_challenge(db, &challenger, &defending).await?;

    let resolved = ChallengeService::new(db)
        .forfeit(&challenge.id, &defending.id, Utc::now())
        .await?;

    assert_eq!(resolved.result.unwrap().score, "1-0");
    assert_eq!(entry(db, &challenger.id).await?.tier, 2);
    assert_eq!(entry(db, &defending.id).await?.tier, 3);

    Ok(())
}

/// Tests that outsiders cannot forfeit and terminal challenges cannot be forfeited.
///
/// Expected: Err(AppError::Validation) for an outsider, Err(AppError::InvalidState) after cancel
#[tokio::test]
async fn rejects_invalid_forfeits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;
    let service = ChallengeService::new(db);

    let outsider = service
        .forfeit(&matchup.challenge.id, "outsider", Utc::now())
        .await;
    assert!(matches!(outsider, Err(AppError::Validation(_))));

    service
        .cancel(&matchup.challenge.id, "rescheduled season", Utc::now())
        .await?;
    let after_cancel = service
        .forfeit(&matchup.challenge.id, &matchup.defending.id, Utc::now())
        .await;
    assert!(matches!(after_cancel, Err(AppError::InvalidState(_))));

    Ok(())
}
