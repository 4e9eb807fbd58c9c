use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartId, CartSession};
use crate::domain::menu::model::MenuItemId;

pub struct UpdateCartQuantityParams {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub delta: i64,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartSession, CartError>;
}
