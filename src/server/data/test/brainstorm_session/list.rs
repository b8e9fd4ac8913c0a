use super::*;

/// Tests listing with no sessions stored.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list_without_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrainstormSessionRepository::new(db.clone());
    let sessions = repo.list().await?;

    assert!(sessions.is_empty());

    Ok(())
}

/// Tests that every session is listed with its own ideas.
///
/// Expected: sessions ordered by ID with matching idea counts
#[tokio::test]
async fn lists_sessions_with_their_ideas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_session_with_ideas(db, 2).await?;
    let empty = factory::create_session(db).await?;
    let (third, _) = factory::helpers::create_session_with_ideas(db, 1).await?;

    let repo = BrainstormSessionRepository::new(db.clone());
    let sessions = repo.list().await?;

    let summary: Vec<(i32, usize)> = sessions
        .iter()
        .map(|session| (session.id, session.idea_count()))
        .collect();
    assert_eq!(summary, vec![(first.id, 2), (empty.id, 0), (third.id, 1)]);

    Ok(())
}
