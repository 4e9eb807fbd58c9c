use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::feed::{LiveOrderFeed, OrderFeed};
use crate::domain::order::repository::{OrderRepository, OrderSubscriber};
use crate::domain::order::use_cases::watch::{WatchOrdersParams, WatchOrdersUseCase};

pub struct WatchOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub subscriber: Arc<dyn OrderSubscriber>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl WatchOrdersUseCase for WatchOrdersUseCaseImpl {
    async fn execute(&self, params: WatchOrdersParams) -> Result<LiveOrderFeed, OrderError> {
        self.logger
            .info(&format!("Opening order feed for business {}", params.business_id));

        // Subscribe before reading history so nothing placed in between is
        // missed; the feed drops whatever arrives twice.
        let subscription = self
            .subscriber
            .subscribe_new_orders(&params.business_id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Order subscription for business {} failed: {}",
                    params.business_id, e
                ));
                OrderError::SubscriptionFailed
            })?;

        let history = self
            .repository
            .list_by_business(&params.business_id)
            .await?;

        Ok(LiveOrderFeed::new(
            OrderFeed::new(params.business_id, history),
            subscription,
        ))
    }
}
