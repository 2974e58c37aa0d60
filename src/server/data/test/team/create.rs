use super::*;

/// Tests creating a team together with its captain membership.
///
/// Verifies that the repository inserts the team row and a single member row flagged as
/// captain with the "captain" role.
///
/// Expected: Ok with team containing one captain member
#[tokio::test]
async fn creates_team_with_captain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(
            CreateTeamParams {
                name: "Blue Side".to_string(),
                captain_discord_id: 123456789,
                discord_role_id: Some(42),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(team.name, "Blue Side");
    assert_eq!(team.discord_role_id, Some(42));
    assert_eq!(team.members.len(), 1);
    assert!(team.is_captain(123456789));
    assert_eq!(team.members[0].role, "captain");

    let member_count = entity::prelude::TeamMember::find().count(db).await?;
    assert_eq!(member_count, 1);

    Ok(())
}

/// Tests the case-sensitive name lookup used to reject duplicate team names.
///
/// Expected: true for the existing name, false otherwise
#[tokio::test]
async fn detects_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::TeamFactory::new(db)
        .name("Red Side")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    assert!(repo.name_exists("Red Side").await?);
    assert!(!repo.name_exists("Green Side").await?);

    Ok(())
}
