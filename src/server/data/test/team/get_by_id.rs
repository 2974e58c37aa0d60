use super::*;

/// Tests loading a team with its roster.
///
/// Expected: Ok(Some) with captain and player, captain first by join time
#[tokio::test]
async fn returns_team_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .captain("1001")
        .build()
        .await?;
    factory::team::create_team_member(db, &team.id, "1002").await?;

    let repo = TeamRepository::new(db);
    let loaded = repo.get_by_id(&team.id).await?.unwrap();

    assert_eq!(loaded.members.len(), 2);
    assert_eq!(loaded.captain().map(|c| c.discord_id), Some(1001));
    assert!(loaded.has_member(1002));
    assert!(!loaded.is_captain(1002));

    Ok(())
}

/// Tests that an unknown id yields nothing rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    assert!(repo.get_by_id("missing").await?.is_none());

    Ok(())
}
