use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::shared::value_objects::BusinessId;

pub struct CreateCartParams {
    pub business_id: BusinessId,
}

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartParams) -> Result<CartSession, CartError>;
}
