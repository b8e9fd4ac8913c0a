use super::*;

/// Tests creating a session.
///
/// Verifies the repository assigns an ID, stamps the creation time, and stores
/// the record.
///
/// Expected: Ok(session) with a new ID and no ideas
#[tokio::test]
async fn creates_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();
    let repo = BrainstormSessionRepository::new(db.clone());
    let session = repo
        .add(CreateBrainstormSessionParam {
            name: "Retro".to_string(),
        })
        .await?;

    assert!(session.id > 0);
    assert_eq!(session.name, "Retro");
    assert!(session.date_created >= before);
    assert!(session.ideas.is_empty());

    let stored = entity::prelude::BrainstormSession::find_by_id(session.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Retro");

    Ok(())
}

/// Tests that consecutive sessions receive distinct IDs.
///
/// Expected: two rows with different IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brainstorm_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrainstormSessionRepository::new(db.clone());
    let first = repo
        .add(CreateBrainstormSessionParam {
            name: "First".to_string(),
        })
        .await?;
    let second = repo
        .add(CreateBrainstormSessionParam {
            name: "Second".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::BrainstormSession::find().count(db).await?, 2);

    Ok(())
}
