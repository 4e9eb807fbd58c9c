use async_trait::async_trait;

use crate::domain::storefront::errors::StorefrontError;
use crate::domain::storefront::model::{StoreCustomization, StoreLookup};

pub struct GetStorefrontParams {
    pub lookup: StoreLookup,
}

#[async_trait]
pub trait GetStorefrontUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetStorefrontParams,
    ) -> Result<StoreCustomization, StorefrontError>;
}
