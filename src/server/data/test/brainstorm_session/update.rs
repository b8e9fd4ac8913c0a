use super::*;

/// Tests persisting a newly appended idea.
///
/// Expected: Ok(session) with the idea stored and assigned an ID
#[tokio::test]
async fn persists_appended_idea() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::create_session(db).await?;

    let repo = BrainstormSessionRepository::new(db.clone());
    let mut loaded = repo.get_by_id(session.id).await?.unwrap();
    let idea = Idea::new("Use dark mode".to_string(), "Easier on the eyes".to_string());
    let date_created = idea.date_created;
    loaded.add_idea(idea);

    let updated = repo.update(&loaded).await?;

    assert_eq!(updated.idea_count(), 1);
    let stored_idea = &updated.ideas[0];
    assert!(stored_idea.is_persisted());
    assert_eq!(stored_idea.name, "Use dark mode");
    assert_eq!(stored_idea.description, "Easier on the eyes");
    assert_eq!(stored_idea.date_created.timestamp(), date_created.timestamp());

    let reloaded = repo.get_by_id(session.id).await?.unwrap();
    assert_eq!(reloaded.ideas, updated.ideas);

    Ok(())
}

/// Tests that existing ideas are not duplicated or rewritten.
///
/// Expected: only the appended idea is inserted
#[tokio::test]
async fn leaves_existing_ideas_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (session, ideas) = factory::helpers::create_session_with_ideas(db, 2).await?;

    let repo = BrainstormSessionRepository::new(db.clone());
    let mut loaded = repo.get_by_id(session.id).await?.unwrap();
    loaded.add_idea(Idea::new("Third".to_string(), String::new()));

    let updated = repo.update(&loaded).await?;

    assert_eq!(updated.idea_count(), 3);
    assert_eq!(updated.ideas[0].id, ideas[0].id);
    assert_eq!(updated.ideas[1].id, ideas[1].id);
    assert_eq!(updated.ideas[2].name, "Third");
    assert_eq!(entity::prelude::Idea::find().count(db).await?, 3);

    Ok(())
}

/// Tests updating a session that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no idea rows written
#[tokio::test]
async fn fails_for_nonexistent_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::create_session(db).await?;

    let repo = BrainstormSessionRepository::new(db.clone());
    let mut ghost = repo.get_by_id(session.id).await?.unwrap();
    ghost.id = 999;
    ghost.add_idea(Idea::new("Orphan".to_string(), String::new()));

    let result = repo.update(&ghost).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Idea::find().count(db).await?, 0);

    Ok(())
}
