use super::*;

/// Tests writing ladder fields back to an entry.
///
/// Expected: tier, prestige, record and protection persisted
#[tokio::test]
async fn persists_ladder_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let tournament = factory::create_tournament(db).await?;
    let model = factory::create_team_tournament(db, &team.id, &tournament.id, 3).await?;

    let repo = TeamTournamentRepository::new(db);
    let mut entry = repo.get_by_id(&model.id).await?.unwrap();

    let protected_until = DateTime::from_timestamp(1_900_000_000, 0).unwrap();
    entry.tier = 2;
    entry.prestige = 15;
    entry.wins = 4;
    entry.losses = 1;
    entry.win_streak = 2;
    entry.protected_until = Some(protected_until);
    repo.update_standing(&entry).await?;

    let loaded = repo.get_by_id(&model.id).await?.unwrap();
    assert_eq!(loaded.tier, 2);
    assert_eq!(loaded.prestige, 15);
    assert_eq!((loaded.wins, loaded.losses, loaded.win_streak), (4, 1, 2));
    assert_eq!(loaded.protected_until, Some(protected_until));
    assert_eq!(loaded.team_id, team.id);

    Ok(())
}
