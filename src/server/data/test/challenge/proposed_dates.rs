use super::*;

/// Tests storing proposed dates and scheduling one of them.
///
/// Verifies that options are numbered from 1 in input order and that the pending guard
/// only lets the first scheduling through.
///
/// Expected: dates numbered 1..=3, first mark_scheduled true, second false
#[tokio::test]
async fn stores_dates_and_schedules_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;
    let id = matchup.challenge.id.as_str();

    let repo = ChallengeRepository::new(db);
    let dates = [future(3), future(1), future(2)];
    repo.insert_proposed_dates(id, &dates).await?;

    let loaded = repo.get_by_id(id).await?.unwrap();
    let numbered: Vec<_> = loaded
        .proposed_dates
        .iter()
        .map(|d| (d.option_number, d.date))
        .collect();
    assert_eq!(
        numbered,
        vec![(1, future(3)), (2, future(1)), (3, future(2))]
    );

    assert!(repo.mark_scheduled(id, future(1)).await?);
    assert!(!repo.mark_scheduled(id, future(2)).await?);

    let scheduled = repo.get_by_id(id).await?.unwrap();
    assert_eq!(scheduled.status, ChallengeStatus::Scheduled);
    assert_eq!(scheduled.scheduled_date, Some(future(1)));

    Ok(())
}
