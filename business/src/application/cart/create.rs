use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::storefront::repository::StoreCustomizationRepository;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub stores: Arc<dyn StoreCustomizationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self, params: CreateCartParams) -> Result<CartSession, CartError> {
        let store = self
            .stores
            .find_by_business_id(&params.business_id)
            .await?
            .ok_or(CartError::StoreNotFound)?;

        let session = CartSession::new(params.business_id, store.currency);
        self.repository.save(&session).await?;

        self.logger.info(&format!(
            "Cart {} opened for business {}",
            session.id, session.business_id
        ));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::CurrencyCode;
    use crate::test_support::{MockCartRepo, MockStoreRepo, business_id, mock_logger, store_with_menu};

    #[tokio::test]
    async fn should_open_empty_cart_in_store_currency() {
        let mut stores = MockStoreRepo::new();
        stores.expect_find_by_business_id().returning(|_| {
            let mut store = store_with_menu(vec![]);
            store.currency = CurrencyCode::parse("NGN").unwrap();
            Ok(Some(store))
        });
        let mut carts = MockCartRepo::new();
        carts.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(carts),
            stores: Arc::new(stores),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(CreateCartParams {
                business_id: business_id(),
            })
            .await
            .unwrap();

        assert!(session.cart.is_empty());
        assert!(session.customer.is_empty());
        assert_eq!(session.currency.as_str(), "NGN");
    }

    #[tokio::test]
    async fn should_reject_unknown_store() {
        let mut stores = MockStoreRepo::new();
        stores.expect_find_by_business_id().returning(|_| Ok(None));
        let mut carts = MockCartRepo::new();
        carts.expect_save().never();

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(carts),
            stores: Arc::new(stores),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCartParams {
                business_id: business_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::StoreNotFound));
    }
}
