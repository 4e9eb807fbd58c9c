use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CartId, CartSession};

/// Storage for browsing sessions. Implementations keep them in memory only
/// and may evict sessions that have been idle for a long time.
#[async_trait]
pub trait CartSessionRepository: Send + Sync {
    async fn get(&self, id: CartId) -> Result<CartSession, RepositoryError>;
    async fn save(&self, session: &CartSession) -> Result<(), RepositoryError>;
}
