use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::sync::mpsc;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::{OrderRepository, OrderSubscriber};
use business::domain::order::subscription::OrderSubscription;
use business::domain::shared::value_objects::BusinessId;

use super::repository::OrderRepositoryPostgres;

/// Channel the `orders` insert trigger notifies on.
pub const NEW_ORDERS_CHANNEL: &str = "new_orders";

const DELIVERY_BUFFER: usize = 32;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Payload of a `new_orders` notification.
#[derive(Debug, Deserialize)]
struct NewOrderNotice {
    id: Uuid,
    business_id: String,
}

impl NewOrderNotice {
    fn parse(payload: &str) -> Option<Self> {
        serde_json::from_str(payload).ok()
    }
}

/// `OrderSubscriber` backed by Postgres `LISTEN/NOTIFY`. Each subscription
/// owns one listener connection and one forwarding task; releasing the
/// subscription aborts the task and closes the connection.
pub struct PgOrderSubscriber {
    pool: PgPool,
    orders: OrderRepositoryPostgres,
}

impl PgOrderSubscriber {
    pub fn new(pool: PgPool) -> Self {
        Self {
            orders: OrderRepositoryPostgres::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl OrderSubscriber for PgOrderSubscriber {
    async fn subscribe_new_orders(
        &self,
        business_id: &BusinessId,
    ) -> Result<OrderSubscription, RepositoryError> {
        let mut listener = PgListener::connect_with(&self.pool)
            .await
            .map_err(RepositoryError::subscription)?;
        listener
            .listen(NEW_ORDERS_CHANNEL)
            .await
            .map_err(RepositoryError::subscription)?;

        let (sender, receiver) = mpsc::channel(DELIVERY_BUFFER);
        let task = tokio::spawn(forward_orders(
            listener,
            self.orders.clone(),
            business_id.clone(),
            sender,
        ));

        tracing::debug!("Listening for new orders of business {}", business_id);
        Ok(OrderSubscription::new(receiver, move || task.abort()))
    }
}

async fn forward_orders(
    mut listener: PgListener,
    orders: OrderRepositoryPostgres,
    business_id: BusinessId,
    sender: mpsc::Sender<Order>,
) {
    loop {
        let notification = tokio::select! {
            _ = sender.closed() => break,
            received = listener.recv() => received,
        };

        // The listener reconnects on the next `recv`; notifications sent
        // while disconnected are lost.
        let notification = match notification {
            Ok(notification) => notification,
            Err(e) => {
                tracing::warn!(
                    "Order listener for business {} lost its connection: {}",
                    business_id,
                    e
                );
                tokio::time::sleep(RETRY_DELAY).await;
                continue;
            }
        };

        let Some(notice) = NewOrderNotice::parse(notification.payload()) else {
            tracing::warn!(
                "Ignoring malformed new order notification: {}",
                notification.payload()
            );
            continue;
        };
        if notice.business_id != business_id.as_str() {
            continue;
        }

        match orders.get_by_id(notice.id).await {
            Ok(order) => {
                if sender.send(order).await.is_err() {
                    break;
                }
            }
            Err(e) => tracing::error!("Could not load new order {}: {}", notice.id, e),
        }
    }

    tracing::debug!("Order listener for business {} stopped", business_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_trigger_payload() {
        let id = Uuid::new_v4();
        let payload = format!(r#"{{"id":"{}","business_id":"owner-1"}}"#, id);

        let notice = NewOrderNotice::parse(&payload).unwrap();

        assert_eq!(notice.id, id);
        assert_eq!(notice.business_id, "owner-1");
    }

    #[test]
    fn should_reject_malformed_payload() {
        assert!(NewOrderNotice::parse("not json").is_none());
        assert!(NewOrderNotice::parse(r#"{"id":"nope","business_id":"b"}"#).is_none());
    }
}
