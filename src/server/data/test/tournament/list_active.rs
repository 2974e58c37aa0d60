use super::*;

/// Tests that only active tournaments are listed.
///
/// Expected: Ok with the single active tournament
#[tokio::test]
async fn lists_only_active_tournaments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_tournament(db).await?;
    factory::tournament::TournamentFactory::new(db)
        .status(TournamentStatus::Upcoming)
        .build()
        .await?;
    factory::tournament::TournamentFactory::new(db)
        .status(TournamentStatus::Completed)
        .build()
        .await?;

    let repo = TournamentRepository::new(db);
    let listed = repo.list_active().await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, active.id);

    Ok(())
}
