use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::BusinessId;

use super::model::{NewOrder, Order};
use super::subscription::OrderSubscription;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Records the order atomically; the returned order carries the database-assigned id and timestamps.
    async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError>;
    /// Orders of one business, most recent first.
    async fn list_by_business(&self, business_id: &BusinessId)
    -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
}

/// Push channel announcing orders as the database accepts them.
#[async_trait]
pub trait OrderSubscriber: Send + Sync {
    async fn subscribe_new_orders(
        &self,
        business_id: &BusinessId,
    ) -> Result<OrderSubscription, RepositoryError>;
}
