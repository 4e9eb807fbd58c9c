use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use business::domain::cart::model::{CartId, CartSession};
use business::domain::cart::repository::CartSessionRepository;
use business::domain::errors::RepositoryError;

/// Process-local cart session store. Sessions idle for longer than `ttl`
/// are treated as gone and evicted on the next write.
pub struct InMemoryCartSessionRepository {
    sessions: RwLock<HashMap<CartId, CartSession>>,
    ttl: Duration,
}

impl InMemoryCartSessionRepository {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn is_expired(&self, session: &CartSession) -> bool {
        Utc::now() - session.updated_at > self.ttl
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl CartSessionRepository for InMemoryCartSessionRepository {
    async fn get(&self, id: CartId) -> Result<CartSession, RepositoryError> {
        let sessions = self.sessions.read().await;
        match sessions.get(&id) {
            Some(session) if !self.is_expired(session) => Ok(session.clone()),
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn save(&self, session: &CartSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| !self.is_expired(existing));
        sessions.insert(session.id, session.clone());
        Ok(())
    }
}
