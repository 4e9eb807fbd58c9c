use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartId, CartSession};
use crate::domain::checkout::model::CustomerInfo;

/// Stores the checkout form as typed; validation happens at checkout.
pub struct SetCartCustomerParams {
    pub cart_id: CartId,
    pub customer: CustomerInfo,
}

#[async_trait]
pub trait SetCartCustomerUseCase: Send + Sync {
    async fn execute(&self, params: SetCartCustomerParams) -> Result<CartSession, CartError>;
}
