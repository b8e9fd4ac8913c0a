use super::*;

/// Tests retrieving a session that has no ideas.
///
/// Expected: Ok(Some(session)) with an empty idea list
#[tokio::test]
async fn returns_session_without_ideas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::brainstorm_session::BrainstormSessionFactory::new(db)
        .name("Retro")
        .build()
        .await?;

    let repo = BrainstormSessionRepository::new(db.clone());
    let result = repo.get_by_id(session.id).await?;

    let retrieved = result.expect("session should exist");
    assert_eq!(retrieved.id, session.id);
    assert_eq!(retrieved.name, "Retro");
    assert_eq!(
        retrieved.date_created.timestamp(),
        session.date_created.timestamp()
    );
    assert!(retrieved.ideas.is_empty());

    Ok(())
}

/// Tests that ideas come back in the order they were added.
///
/// Expected: Ok(Some(session)) with ideas ordered by ID
#[tokio::test]
async fn returns_ideas_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (session, ideas) = factory::helpers::create_session_with_ideas(db, 3).await?;

    let repo = BrainstormSessionRepository::new(db.clone());
    let retrieved = repo.get_by_id(session.id).await?.unwrap();

    let expected: Vec<i32> = ideas.iter().map(|idea| idea.id).collect();
    let actual: Vec<i32> = retrieved.ideas.iter().map(|idea| idea.id).collect();
    assert_eq!(actual, expected);

    Ok(())
}

/// Tests that ideas of other sessions are not included.
///
/// Expected: each session only sees its own ideas
#[tokio::test]
async fn excludes_ideas_of_other_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_session_with_ideas(db, 2).await?;
    let (second, _) = factory::helpers::create_session_with_ideas(db, 1).await?;

    let repo = BrainstormSessionRepository::new(db.clone());

    assert_eq!(repo.get_by_id(first.id).await?.unwrap().idea_count(), 2);
    assert_eq!(repo.get_by_id(second.id).await?.unwrap().idea_count(), 1);

    Ok(())
}

/// Tests retrieving a non-existent session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrainstormSessionRepository::new(db.clone());
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
