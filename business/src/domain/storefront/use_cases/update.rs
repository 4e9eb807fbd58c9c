use async_trait::async_trait;

use crate::domain::shared::value_objects::BusinessId;
use crate::domain::storefront::errors::StorefrontError;
use crate::domain::storefront::model::{CustomizationChanges, StoreCustomization};

pub struct UpdateCustomizationParams {
    pub business_id: BusinessId,
    pub changes: CustomizationChanges,
}

#[async_trait]
pub trait UpdateCustomizationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCustomizationParams,
    ) -> Result<StoreCustomization, StorefrontError>;
}
