use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::BusinessId;

use super::model::StoreCustomization;

#[async_trait]
pub trait StoreCustomizationRepository: Send + Sync {
    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<StoreCustomization>, RepositoryError>;
    async fn find_by_public_name(
        &self,
        public_name: &str,
    ) -> Result<Option<StoreCustomization>, RepositoryError>;
    /// Inserts or updates the customization keyed by its business id.
    async fn save(&self, customization: &StoreCustomization) -> Result<(), RepositoryError>;
}
