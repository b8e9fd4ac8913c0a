//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a session followed by `idea_count` ideas belonging to it.
///
/// Ideas are inserted in order, so their IDs ascend in the returned vector.
///
/// # Returns
/// - `Ok((session, ideas))` - The created session and its ideas
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_with_ideas(
    db: &DatabaseConnection,
    idea_count: usize,
) -> Result<
    (
        entity::brainstorm_session::Model,
        Vec<entity::idea::Model>,
    ),
    DbErr,
> {
    let session = crate::factory::brainstorm_session::create_session(db).await?;

    let mut ideas = Vec::with_capacity(idea_count);
    for _ in 0..idea_count {
        ideas.push(crate::factory::idea::create_idea(db, session.id).await?);
    }

    Ok((session, ideas))
}
