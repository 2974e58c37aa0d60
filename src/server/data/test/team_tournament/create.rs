use super::*;

/// Tests entering a team into a tournament.
///
/// Expected: Ok with a clean record at the requested tier
#[tokio::test]
async fn creates_entry_with_clean_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let tournament = factory::create_tournament(db).await?;

    let repo = TeamTournamentRepository::new(db);
    let entry = repo.create(&team.id, &tournament.id, 2, Utc::now()).await?;

    assert_eq!(entry.tier, 2);
    assert_eq!(entry.prestige, 0);
    assert_eq!((entry.wins, entry.losses, entry.win_streak), (0, 0, 0));
    assert!(entry.protected_until.is_none());

    let found = repo
        .find_by_team_and_tournament(&team.id, &tournament.id)
        .await?
        .unwrap();
    assert_eq!(found.id, entry.id);

    Ok(())
}

/// Tests counting entries per tier.
///
/// Expected: counts match the entries created in each tier
#[tokio::test]
async fn counts_entries_in_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    for tier in [2, 2, 3] {
        let team = factory::create_team(db).await?;
        factory::create_team_tournament(db, &team.id, &tournament.id, tier).await?;
    }

    let repo = TeamTournamentRepository::new(db);
    assert_eq!(repo.count_in_tier(&tournament.id, 1).await?, 0);
    assert_eq!(repo.count_in_tier(&tournament.id, 2).await?, 2);
    assert_eq!(repo.count_in_tier(&tournament.id, 3).await?, 1);

    Ok(())
}
