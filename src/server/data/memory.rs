//! In-memory session repository for tests.
//!
//! Mirrors the behavior of the database repository (sequential IDs, append-only
//! updates) and adds switches for simulating write failures and counting writes.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};
use tokio::sync::RwLock;

use crate::server::{
    data::SessionRepository,
    model::{
        brainstorm_session::{BrainstormSession, CreateBrainstormSessionParam},
        idea::Idea,
    },
};

#[derive(Default)]
struct MemoryStore {
    sessions: BTreeMap<i32, BrainstormSession>,
    last_session_id: i32,
    last_idea_id: i32,
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    store: RwLock<MemoryStore>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    update_calls: AtomicUsize,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `get_by_id` and `list` call fail.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent `add` and `update` call fail without writing.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of times `update` has been called, including failed calls.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Inserts a session with the given idea names and returns it.
    pub async fn seed(&self, name: &str, idea_names: &[&str]) -> BrainstormSession {
        let mut store = self.store.write().await;

        store.last_session_id += 1;
        let mut session = BrainstormSession {
            id: store.last_session_id,
            name: name.to_string(),
            date_created: Utc::now(),
            ideas: Vec::new(),
        };

        for idea_name in idea_names {
            store.last_idea_id += 1;
            let mut idea = Idea::new(idea_name.to_string(), format!("About {}", idea_name));
            idea.id = store.last_idea_id;
            session.add_idea(idea);
        }

        store.sessions.insert(session.id, session.clone());
        session
    }

    fn check(&self, flag: &AtomicBool, operation: &str) -> Result<(), DbErr> {
        if flag.load(Ordering::SeqCst) {
            Err(DbErr::Custom(format!("simulated {} failure", operation)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<BrainstormSession>, DbErr> {
        self.check(&self.fail_reads, "read")?;

        Ok(self.store.read().await.sessions.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DbErr> {
        self.check(&self.fail_reads, "read")?;

        Ok(self.store.read().await.sessions.values().cloned().collect())
    }

    async fn add(&self, param: CreateBrainstormSessionParam) -> Result<BrainstormSession, DbErr> {
        self.check(&self.fail_writes, "write")?;

        let mut store = self.store.write().await;
        store.last_session_id += 1;

        let session = BrainstormSession {
            id: store.last_session_id,
            name: param.name,
            date_created: Utc::now(),
            ideas: Vec::new(),
        };
        store.sessions.insert(session.id, session.clone());

        Ok(session)
    }

    async fn update(&self, session: &BrainstormSession) -> Result<BrainstormSession, DbErr> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_writes, "write")?;

        let mut store = self.store.write().await;
        let mut last_idea_id = store.last_idea_id;

        let stored = store.sessions.get_mut(&session.id).ok_or(DbErr::RecordNotFound(
            format!("Brainstorm session with id {} not found", session.id),
        ))?;

        for idea in session.ideas.iter().filter(|idea| !idea.is_persisted()) {
            last_idea_id += 1;
            stored.add_idea(Idea {
                id: last_idea_id,
                ..idea.clone()
            });
        }

        let updated = stored.clone();
        store.last_idea_id = last_idea_id;

        Ok(updated)
    }
}
