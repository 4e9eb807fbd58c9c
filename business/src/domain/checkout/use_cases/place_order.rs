use async_trait::async_trait;

use crate::domain::cart::model::CartId;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::CustomerInfo;
use crate::domain::order::model::Order;

pub struct PlaceOrderParams {
    pub cart_id: CartId,
    /// Replaces the form stored on the session when present.
    pub customer: Option<CustomerInfo>,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, CheckoutError>;
}
