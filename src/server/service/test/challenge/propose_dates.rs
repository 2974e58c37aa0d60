use super::*;

/// Tests recording the required number of date options.
///
/// Expected: Ok with options numbered in order and the challenge still pending
#[tokio::test]
async fn stores_date_options() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;

    let challenge = ChallengeService::new(db)
        .propose_dates(&matchup.challenge.id, &date_options(now, 3), now)
        .await?;

    assert_eq!(challenge.status, ChallengeStatus::Pending);
    assert_eq!(challenge.proposed_dates.len(), 3);
    assert_eq!(challenge.proposed_dates[0].option_number, 1);
    assert!(challenge.proposed_dates[0].date < challenge.proposed_dates[2].date);

    Ok(())
}

/// Tests proposing fewer dates than the tournament requires.
///
/// The default tournament requires three options; two are offered.
///
/// Expected: Err(AppError::Validation), challenge still pending with no dates
#[tokio::test]
async fn rejects_too_few_options() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;

    let service = ChallengeService::new(db);
    let result = service
        .propose_dates(&matchup.challenge.id, &date_options(now, 2), now)
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let challenge = service.get_by_id(&matchup.challenge.id).await?.unwrap();
    assert_eq!(challenge.status, ChallengeStatus::Pending);
    assert!(challenge.proposed_dates.is_empty());

    Ok(())
}

/// Tests rejecting past, duplicate and unparsable dates.
///
/// Expected: Err(AppError::Validation) for each
#[tokio::test]
async fn rejects_invalid_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    let service = ChallengeService::new(db);

    let mut past = date_options(now, 2);
    past.push((now - Duration::days(1)).to_rfc3339());

    let mut duplicate = date_options(now, 2);
    duplicate.push(duplicate[0].clone());

    let mut garbled = date_options(now, 2);
    garbled.push("next tuesday".to_string());

    for dates in [past, duplicate, garbled] {
        let result = service
            .propose_dates(&matchup.challenge.id, &dates, now)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    Ok(())
}

/// Tests that dates cannot be proposed twice.
///
/// Expected: Err(AppError::InvalidState) on the second call
#[tokio::test]
async fn rejects_second_proposal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    let service = ChallengeService::new(db);

    service
        .propose_dates(&matchup.challenge.id, &date_options(now, 3), now)
        .await?;
    let second = service
        .propose_dates(&matchup.challenge.id, &date_options(now, 4), now)
        .await;

    assert!(matches!(second, Err(AppError::InvalidState(_))));

    Ok(())
}
