use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::set_customer::{SetCartCustomerParams, SetCartCustomerUseCase};
use crate::domain::checkout::model::SubmissionGuard;
use crate::domain::logger::Logger;

pub struct SetCartCustomerUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub guard: Arc<SubmissionGuard>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartCustomerUseCase for SetCartCustomerUseCaseImpl {
    async fn execute(&self, params: SetCartCustomerParams) -> Result<CartSession, CartError> {
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

        session.customer = params.customer;
        session.touch();
        self.repository.save(&session).await?;

        self.logger
            .debug(&format!("Customer details updated for cart {}", session.id));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::model::CustomerInfo;
    use crate::domain::shared::value_objects::CurrencyCode;
    use crate::test_support::{MockCartRepo, business_id, menu_item, mock_logger};

    #[tokio::test]
    async fn should_store_form_without_touching_cart() {
        let mut session = CartSession::new(business_id(), CurrencyCode::default());
        session.cart.add_item(&menu_item("rice", "Jollof Rice", "1500"));
        let cart_id = session.id;
        let mut carts = MockCartRepo::new();
        carts
            .expect_get()
            .returning(move |_| Ok(session.clone()));
        carts
            .expect_save()
            .withf(|saved| saved.customer.name == "Ada" && saved.cart.item_count() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SetCartCustomerUseCaseImpl {
            repository: Arc::new(carts),
            guard: Arc::new(SubmissionGuard::new()),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(SetCartCustomerParams {
                cart_id,
                customer: CustomerInfo {
                    name: "Ada".to_string(),
                    // Stored as typed, validated at checkout.
                    phone: "not a phone".to_string(),
                    email: None,
                },
            })
            .await
            .unwrap();

        assert_eq!(session.customer.phone, "not a phone");
    }

    #[tokio::test]
    async fn should_refuse_form_update_while_checkout_holds_cart() {
        let session = CartSession::new(business_id(), CurrencyCode::default());
        let cart_id = session.id;
        let mut carts = MockCartRepo::new();
        carts.expect_get().never();
        carts.expect_save().never();
        let guard = Arc::new(SubmissionGuard::new());
        let _checkout = guard.try_acquire(cart_id);

        let use_case = SetCartCustomerUseCaseImpl {
            repository: Arc::new(carts),
            guard: guard.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartCustomerParams {
                cart_id,
                customer: CustomerInfo::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::CheckoutInProgress));
    }
}
