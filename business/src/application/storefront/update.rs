use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::storefront::errors::StorefrontError;
use crate::domain::storefront::model::StoreCustomization;
use crate::domain::storefront::repository::StoreCustomizationRepository;
use crate::domain::storefront::use_cases::update::{
    UpdateCustomizationParams, UpdateCustomizationUseCase,
};

pub struct UpdateCustomizationUseCaseImpl {
    pub repository: Arc<dyn StoreCustomizationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCustomizationUseCase for UpdateCustomizationUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCustomizationParams,
    ) -> Result<StoreCustomization, StorefrontError> {
        self.logger.info(&format!(
            "Updating storefront customization for business {}",
            params.business_id
        ));

        let mut customization = self
            .repository
            .find_by_business_id(&params.business_id)
            .await?
            .unwrap_or_else(|| StoreCustomization::new(params.business_id.clone()));

        let previous_name = customization.public_name.clone();
        customization.apply(params.changes)?;

        if let Some(name) = &customization.public_name
            && previous_name.as_deref() != Some(name.as_str())
            && let Some(owner) = self.repository.find_by_public_name(name).await?
            && owner.business_id != params.business_id
        {
            self.logger
                .warn(&format!("Public name {} is already taken", name));
            return Err(StorefrontError::PublicNameTaken);
        }

        self.repository
            .save(&customization)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => StorefrontError::PublicNameTaken,
                other => StorefrontError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Storefront customization saved: {}",
            customization.id
        ));
        Ok(customization)
    }
}
