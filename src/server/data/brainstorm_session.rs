//! SeaORM implementation of the session repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::SessionRepository,
    model::brainstorm_session::{BrainstormSession, CreateBrainstormSessionParam},
};

/// Session repository backed by the application database.
///
/// Holds its own handle to the connection pool so it can be shared across requests
/// behind an `Arc<dyn SessionRepository>`.
#[derive(Clone)]
pub struct BrainstormSessionRepository {
    db: DatabaseConnection,
}

impl BrainstormSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Loads the ideas of a session in insertion order.
async fn find_ideas<C: ConnectionTrait>(
    conn: &C,
    session_id: i32,
) -> Result<Vec<entity::idea::Model>, DbErr> {
    entity::prelude::Idea::find()
        .filter(entity::idea::Column::SessionId.eq(session_id))
        .order_by_asc(entity::idea::Column::Id)
        .all(conn)
        .await
}

#[async_trait]
impl SessionRepository for BrainstormSessionRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<BrainstormSession>, DbErr> {
        let Some(session) = entity::prelude::BrainstormSession::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let ideas = find_ideas(&self.db, id).await?;

        Ok(Some(BrainstormSession::from_entity(session, ideas)))
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DbErr> {
        let sessions = entity::prelude::BrainstormSession::find()
            .order_by_asc(entity::brainstorm_session::Column::Id)
            .find_with_related(entity::prelude::Idea)
            .all(&self.db)
            .await?;

        Ok(sessions
            .into_iter()
            .map(|(session, ideas)| BrainstormSession::from_entity(session, ideas))
            .collect())
    }

    async fn add(&self, param: CreateBrainstormSessionParam) -> Result<BrainstormSession, DbErr> {
        let session = entity::brainstorm_session::ActiveModel {
            name: ActiveValue::Set(param.name),
            date_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(BrainstormSession::from_entity(session, Vec::new()))
    }

    async fn update(&self, session: &BrainstormSession) -> Result<BrainstormSession, DbErr> {
        let txn = self.db.begin().await?;

        let stored = entity::prelude::BrainstormSession::find_by_id(session.id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Brainstorm session with id {} not found",
                session.id
            )))?;

        for idea in session.ideas.iter().filter(|idea| !idea.is_persisted()) {
            entity::idea::ActiveModel {
                session_id: ActiveValue::Set(session.id),
                name: ActiveValue::Set(idea.name.clone()),
                description: ActiveValue::Set(idea.description.clone()),
                date_created: ActiveValue::Set(idea.date_created),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        let ideas = find_ideas(&txn, session.id).await?;

        txn.commit().await?;

        Ok(BrainstormSession::from_entity(stored, ideas))
    }
}
