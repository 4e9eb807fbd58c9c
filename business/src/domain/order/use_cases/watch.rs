use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::feed::LiveOrderFeed;
use crate::domain::shared::value_objects::BusinessId;

pub struct WatchOrdersParams {
    pub business_id: BusinessId,
}

#[async_trait]
pub trait WatchOrdersUseCase: Send + Sync {
    async fn execute(&self, params: WatchOrdersParams) -> Result<LiveOrderFeed, OrderError>;
}
