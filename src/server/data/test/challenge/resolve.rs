use super::*;

fn completed(winner: &str, now: DateTime<Utc>) -> Resolution {
    Resolution {
        status: ChallengeStatus::Completed,
        winner_team_tournament_id: Some(winner.to_string()),
        score: Some("2-1".to_string()),
        tier_after: Some(SidePair {
            challenger: 1,
            defending: 2,
        }),
        prestige_awarded: Some(SidePair {
            challenger: 15,
            defending: -5,
        }),
        forfeited_by: None,
        cancel_reason: None,
        resolved_at: now,
    }
}

/// Tests writing a terminal state together with the series games.
///
/// Expected: Ok(true) and every resolution field readable afterwards
#[tokio::test]
async fn resolves_open_challenge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;
    let id = matchup.challenge.id.as_str();
    let (c, d) = (matchup.challenger.id.clone(), matchup.defending.id.clone());

    let repo = ChallengeRepository::new(db);
    assert!(repo.resolve(id, completed(&c, future(0))).await?);

    let game = |winner: &str, loser: &str| GameResult {
        winner_team_tournament_id: winner.to_string(),
        loser_team_tournament_id: loser.to_string(),
    };
    repo.insert_games(id, &[game(&c, &d), game(&d, &c), game(&c, &d)])
        .await?;

    let loaded = repo.get_by_id(id).await?.unwrap();
    assert_eq!(loaded.status, ChallengeStatus::Completed);
    assert_eq!(loaded.resolved_at, Some(future(0)));
    assert_eq!(
        loaded.tier_after,
        Some(SidePair {
            challenger: 1,
            defending: 2
        })
    );
    assert_eq!(
        loaded.prestige_awarded,
        Some(SidePair {
            challenger: 15,
            defending: -5
        })
    );

    let result = loaded.result.unwrap();
    assert_eq!(result.winner_team_tournament_id, c);
    assert_eq!(result.score, "2-1");
    assert_eq!(result.games.len(), 3);
    assert_eq!(result.games[1].winner_team_tournament_id, d);

    Ok(())
}

/// Tests that a challenge can only be resolved once.
///
/// Expected: second resolve returns Ok(false) and leaves the first outcome intact
#[tokio::test]
async fn refuses_second_resolution() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matchup = create_matchup(db, 2, 1).await?;
    let id = matchup.challenge.id.as_str();

    let repo = ChallengeRepository::new(db);
    assert!(repo.resolve(id, completed(&matchup.challenger.id, future(0))).await?);

    let cancel = Resolution {
        status: ChallengeStatus::Cancelled,
        winner_team_tournament_id: None,
        score: None,
        tier_after: None,
        prestige_awarded: None,
        forfeited_by: None,
        cancel_reason: Some("late".to_string()),
        resolved_at: future(1),
    };
    assert!(!repo.resolve(id, cancel).await?);

    let loaded = repo.get_by_id(id).await?.unwrap();
    assert_eq!(loaded.status, ChallengeStatus::Completed);
    assert!(loaded.cancel_reason.is_none());

    Ok(())
}
