use super::*;

/// Tests scheduling a challenge on one of its proposed dates.
///
/// Expected: Ok with status scheduled and the second option's date
#[tokio::test]
async fn schedules_selected_option() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    let service = ChallengeService::new(db);

    let proposed = service
        .propose_dates(&matchup.challenge.id, &date_options(now, 3), now)
        .await?;
    let scheduled = service.schedule(&matchup.challenge.id, 2, now).await?;

    assert_eq!(scheduled.status, ChallengeStatus::Scheduled);
    assert_eq!(
        scheduled.scheduled_date,
        Some(proposed.proposed_dates[1].date)
    );

    Ok(())
}

/// Tests selecting an option that does not exist.
///
/// Expected: Err(AppError::InvalidState) for option 4 of 3 and for option 0
#[tokio::test]
async fn rejects_out_of_range_selection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let matchup = create_matchup(db, 2, 1).await?;
    let service = ChallengeService::new(db);

    service
        .propose_dates(&matchup.challenge.id, &date_options(now, 3), now)
        .await?;

    for selection in [4, 0] {
        let result = service.schedule(&matchup.challenge.id, selection, now).await;
        assert!(matches!(result, Err(AppError::InvalidState(_))));
    }

    let challenge = service.get_by_id(&matchup.challenge.id).await?.unwrap();
    assert_eq!(challenge.status, ChallengeStatus::Pending);

    Ok(())
}

/// Tests scheduling before any dates were proposed.
///
/// Expected: Err(AppError::InvalidState)
#[tokio::test]
async fn rejects_schedule_without_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;

    let result = ChallengeService::new(db)
        .schedule(&matchup.challenge.id, 1, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));

    Ok(())
}
