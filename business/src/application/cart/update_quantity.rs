use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartSession, QuantityChange};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::checkout::model::SubmissionGuard;
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub guard: Arc<SubmissionGuard>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartSession, CartError> {
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

        match session.cart.update_quantity(&params.item_id, params.delta) {
            QuantityChange::NotInCart => {
                // Unknown lines are a no-op, the cart is returned unchanged.
                self.logger.debug(&format!(
                    "Item {} not in cart {}, nothing to update",
                    params.item_id, session.id
                ));
                return Ok(session);
            }
            QuantityChange::Removed => self.logger.info(&format!(
                "Removed {} from cart {}",
                params.item_id, session.id
            )),
            QuantityChange::Updated(quantity) => self.logger.debug(&format!(
                "Item {} in cart {} now at quantity {}",
                params.item_id, session.id, quantity
            )),
        }

        session.touch();
        self.repository.save(&session).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::model::MenuItemId;
    use crate::domain::shared::value_objects::CurrencyCode;
    use crate::test_support::{MockCartRepo, business_id, dec, menu_item, mock_logger};

    fn session_with_three_rice() -> CartSession {
        let mut session = CartSession::new(business_id(), CurrencyCode::default());
        let rice = menu_item("rice", "Jollof Rice", "10");
        for _ in 0..3 {
            session.cart.add_item(&rice);
        }
        session
    }

    async fn run(session: CartSession, delta: i64, item: &str, saves: usize) -> CartSession {
        let cart_id = session.id;
        let mut carts = MockCartRepo::new();
        carts
            .expect_get()
            .returning(move |_| Ok(session.clone()));
        carts.expect_save().times(saves).returning(|_| Ok(()));

        let use_case = UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(carts),
            guard: Arc::new(SubmissionGuard::new()),
            logger: mock_logger(),
        };

        use_case
            .execute(UpdateCartQuantityParams {
                cart_id,
                item_id: MenuItemId::new(item),
                delta,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn should_decrement_quantity() {
        let session = run(session_with_three_rice(), -1, "rice", 1).await;

        assert_eq!(session.cart.line(&MenuItemId::new("rice")).unwrap().quantity, 2);
        assert_eq!(session.cart.total(), dec("20"));
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_reaches_zero() {
        let session = run(session_with_three_rice(), -5, "rice", 1).await;

        assert!(session.cart.is_empty());
        assert_eq!(session.cart.total(), dec("0"));
    }

    #[tokio::test]
    async fn should_ignore_item_not_in_cart() {
        let session = run(session_with_three_rice(), 1, "beans", 0).await;

        assert_eq!(session.cart.item_count(), 3);
    }

    #[tokio::test]
    async fn should_refuse_quantity_change_while_checkout_holds_cart() {
        let session = session_with_three_rice();
        let cart_id = session.id;
        let mut carts = MockCartRepo::new();
        carts.expect_get().never();
        carts.expect_save().never();
        let guard = Arc::new(SubmissionGuard::new());
        let _checkout = guard.try_acquire(cart_id);

        let use_case = UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(carts),
            guard: guard.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartQuantityParams {
                cart_id,
                item_id: MenuItemId::new("rice"),
                delta: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::CheckoutInProgress));
    }
}
