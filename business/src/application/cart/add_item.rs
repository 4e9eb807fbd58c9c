use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartSession, ItemAdded};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::checkout::model::SubmissionGuard;
use crate::domain::logger::Logger;
use crate::domain::storefront::repository::StoreCustomizationRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub stores: Arc<dyn StoreCustomizationRepository>,
    pub guard: Arc<SubmissionGuard>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddCartItemParams,
    ) -> Result<(CartSession, ItemAdded), CartError> {
        let Some(_permit) = self.guard.try_acquire(params.cart_id) else {
            self.logger.warn(&format!(
                "Edit to cart {} refused, checkout in progress",
                params.cart_id
            ));
            return Err(CartError::CheckoutInProgress);
        };

        let mut session = self
            .repository
            .get(params.cart_id)
            .await
            .map_err(CartError::from_lookup)?;

        // Price comes from the current catalog, never from the caller.
        let store = self
            .stores
            .find_by_business_id(&session.business_id)
            .await?
            .ok_or(CartError::StoreNotFound)?;
        let item = store
            .find_menu_item(&params.item_id)
            .ok_or(CartError::ItemNotFound)?;

        let added = session.cart.add_item(item);
        session.touch();
        self.repository.save(&session).await?;

        self.logger.info(&format!(
            "Added {} to cart {} (quantity {})",
            added.name, session.id, added.quantity
        ));
        Ok((session, added))
    }
}
