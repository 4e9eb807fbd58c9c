use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::storefront::errors::StorefrontError;
use crate::domain::storefront::model::{StoreCustomization, StoreLookup};
use crate::domain::storefront::repository::StoreCustomizationRepository;
use crate::domain::storefront::use_cases::get::{GetStorefrontParams, GetStorefrontUseCase};

pub struct GetStorefrontUseCaseImpl {
    pub repository: Arc<dyn StoreCustomizationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStorefrontUseCase for GetStorefrontUseCaseImpl {
    async fn execute(
        &self,
        params: GetStorefrontParams,
    ) -> Result<StoreCustomization, StorefrontError> {
        self.logger
            .debug(&format!("Loading storefront by {}", params.lookup));

        let found = match &params.lookup {
            StoreLookup::ByBusinessId(business_id) => {
                self.repository.find_by_business_id(business_id).await?
            }
            StoreLookup::ByPublicName(name) => {
                let name = name.trim().to_lowercase();
                if name.is_empty() {
                    return Err(StorefrontError::NotFound);
                }
                self.repository.find_by_public_name(&name).await?
            }
        };

        found.ok_or_else(|| {
            self.logger
                .warn(&format!("Storefront not found for {}", params.lookup));
            StorefrontError::NotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockStoreRepo, business_id, menu_item, mock_logger, store_with_menu};

    #[tokio::test]
    async fn should_return_storefront_when_found_by_business_id() {
        let store = store_with_menu(vec![menu_item("rice", "Jollof Rice", "1500")]);
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_find_by_business_id()
            .returning(move |_| Ok(Some(store.clone())));

        let use_case = GetStorefrontUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStorefrontParams {
                lookup: StoreLookup::ByBusinessId(business_id()),
            })
            .await;

        let store = result.unwrap();
        assert_eq!(store.business_id, business_id());
        assert_eq!(store.menu_items.len(), 1);
    }

    #[tokio::test]
    async fn should_normalize_public_name_before_lookup() {
        let store = store_with_menu(vec![]);
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_find_by_public_name()
            .withf(|name| name == "mama-put")
            .times(1)
            .returning(move |_| Ok(Some(store.clone())));

        let use_case = GetStorefrontUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStorefrontParams {
                lookup: StoreLookup::ByPublicName(" Mama-Put ".to_string()),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_find_by_business_id()
            .returning(|_| Ok(None));

        let use_case = GetStorefrontUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStorefrontParams {
                lookup: StoreLookup::ByBusinessId(business_id()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), StorefrontError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_find_by_business_id()
            .returning(|_| Err(RepositoryError::database("connection reset")));

        let use_case = GetStorefrontUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStorefrontParams {
                lookup: StoreLookup::ByBusinessId(business_id()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), StorefrontError::Repository(_)));
    }
}
