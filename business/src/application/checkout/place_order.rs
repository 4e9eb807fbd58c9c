use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CustomerValidator, SubmissionGuard, assemble_order};
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;

pub struct PlaceOrderUseCaseImpl {
    pub carts: Arc<dyn CartSessionRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub guard: Arc<SubmissionGuard>,
    pub validator: CustomerValidator,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, CheckoutError> {
        let cart_id = params.cart_id;
        self.logger
            .info(&format!("Checkout requested for cart {}", cart_id));

        // Held from the first read so a concurrent trigger cannot load the
        // same cart and submit it again.
        let Some(_permit) = self.guard.try_acquire(cart_id) else {
            self.logger.warn(&format!(
                "Checkout for cart {} ignored, a submission is in flight",
                cart_id
            ));
            return Err(CheckoutError::AlreadySubmitting);
        };

        let mut session = self.carts.get(cart_id).await.map_err(|e| match e {
            RepositoryError::NotFound => CheckoutError::CartNotFound,
            other => CheckoutError::Repository(other),
        })?;

        if let Some(customer) = params.customer {
            session.customer = customer;
            session.touch();
            self.carts.save(&session).await?;
        }

        let customer = self.validator.validate(&session.customer).inspect_err(|e| {
            self.logger
                .debug(&format!("Checkout for cart {} rejected: {}", cart_id, e));
        })?;
        let payload = assemble_order(&session, customer).inspect_err(|e| {
            self.logger
                .debug(&format!("Checkout for cart {} rejected: {}", cart_id, e));
        })?;

        let order = self.orders.insert(&payload).await.map_err(|e| {
            self.logger
                .error(&format!("Order submission for cart {} failed: {}", cart_id, e));
            CheckoutError::SubmissionFailed
        })?;

        session.cart.clear();
        session.customer.clear();
        session.touch();
        // The order is recorded at this point; a failed reset must not make
        // the customer submit it a second time.
        if let Err(e) = self.carts.save(&session).await {
            self.logger.error(&format!(
                "Order {} placed but cart {} could not be reset: {}",
                order.id, cart_id, e
            ));
        }

        self.logger.info(&format!(
            "Order {} placed for business {} ({} items, total {} {})",
            order.id,
            order.business_id,
            order.item_count(),
            order.total_amount,
            order.currency
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
    use crate::domain::cart::errors::CartError;
    use crate::domain::cart::model::{CartId, CartSession};
    use crate::domain::cart::use_cases::update_quantity::{
        UpdateCartQuantityParams, UpdateCartQuantityUseCase,
    };
    use crate::domain::checkout::model::{CheckoutField, CustomerInfo};
    use crate::domain::menu::model::MenuItemId;
    use crate::domain::order::model::{NewOrder, OrderStatus};
    use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};
    use crate::test_support::{
        MockCartRepo, MockOrderRepo, business_id, dec, menu_item, mock_logger, persisted_order,
    };
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use uuid::Uuid;

    fn ada() -> CustomerInfo {
        CustomerInfo {
            name: "Ada".to_string(),
            phone: "08012345678".to_string(),
            email: Some("ada@example.com".to_string()),
        }
    }

    fn filled_session() -> CartSession {
        let mut session = CartSession::new(business_id(), CurrencyCode::parse("NGN").unwrap());
        let rice = menu_item("rice", "Jollof Rice", "1500");
        session.cart.add_item(&rice);
        session.cart.add_item(&rice);
        session.cart.add_item(&menu_item("drink", "Zobo", "300.50"));
        session.customer = ada();
        session
    }

    fn carts_holding(session: CartSession) -> MockCartRepo {
        let mut carts = MockCartRepo::new();
        carts
            .expect_get()
            .returning(move |_| Ok(session.clone()));
        carts
    }

    fn use_case(
        carts: impl CartSessionRepository + 'static,
        orders: impl OrderRepository + 'static,
    ) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            carts: Arc::new(carts),
            orders: Arc::new(orders),
            guard: Arc::new(SubmissionGuard::new()),
            validator: CustomerValidator::default(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_place_order_and_reset_cart() {
        let session = filled_session();
        let cart_id = session.id;
        let mut carts = carts_holding(session);
        carts
            .expect_save()
            .withf(|saved| saved.cart.is_empty() && saved.customer.is_empty())
            .times(1)
            .returning(|_| Ok(()));
        let mut orders = MockOrderRepo::new();
        orders
            .expect_insert()
            .withf(|payload| {
                payload.business_id == business_id()
                    && payload.customer_name == "Ada"
                    && payload.items.len() == 2
                    && payload.items[0].quantity == 2
                    && payload.total_amount == dec("3300.50")
                    && payload.currency.as_str() == "NGN"
                    && payload.status == OrderStatus::Pending
            })
            .times(1)
            .returning(|payload| Ok(persisted_order(payload)));

        let use_case = use_case(carts, orders);

        let order = use_case
            .execute(PlaceOrderParams {
                cart_id,
                customer: None,
            })
            .await
            .unwrap();

        assert_eq!(order.customer_email.as_deref(), Some("ada@example.com"));
        assert_eq!(order.item_count(), 3);
        assert!(!use_case.guard.is_submitting(cart_id));
    }

    #[tokio::test]
    async fn should_use_form_sent_with_checkout() {
        let mut session = filled_session();
        session.customer = CustomerInfo::default();
        let cart_id = session.id;
        let mut carts = carts_holding(session);
        carts.expect_save().returning(|_| Ok(()));
        let mut orders = MockOrderRepo::new();
        orders
            .expect_insert()
            .withf(|payload| payload.customer_phone == "08012345678")
            .times(1)
            .returning(|payload| Ok(persisted_order(payload)));

        let result = use_case(carts, orders)
            .execute(PlaceOrderParams {
                cart_id,
                customer: Some(ada()),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_blank_name_without_submitting() {
        let mut session = filled_session();
        session.customer.name = "   ".to_string();
        let cart_id = session.id;
        let mut carts = carts_holding(session);
        carts.expect_save().never();
        let mut orders = MockOrderRepo::new();
        orders.expect_insert().never();

        let result = use_case(carts, orders)
            .execute(PlaceOrderParams {
                cart_id,
                customer: None,
            })
            .await;

        assert_eq!(result.unwrap_err().field(), Some(CheckoutField::Name));
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let mut session = CartSession::new(business_id(), CurrencyCode::default());
        session.customer = ada();
        let cart_id = session.id;
        let mut orders = MockOrderRepo::new();
        orders.expect_insert().never();

        let result = use_case(carts_holding(session), orders)
            .execute(PlaceOrderParams {
                cart_id,
                customer: None,
            })
            .await;

        assert_eq!(result.unwrap_err().field(), Some(CheckoutField::Cart));
    }

    #[tokio::test]
    async fn should_keep_cart_and_allow_retry_when_submission_fails() {
        let session = filled_session();
        let cart_id = session.id;
        let mut carts = carts_holding(session);
        carts.expect_save().never();
        let mut orders = MockOrderRepo::new();
        orders
            .expect_insert()
            .times(2)
            .returning(|_| Err(RepositoryError::database("relation \"orders\" is locked")));

        let use_case = use_case(carts, orders);
        let params = || PlaceOrderParams {
            cart_id,
            customer: None,
        };

        let first = use_case.execute(params()).await;
        let second = use_case.execute(params()).await;

        assert!(matches!(first.unwrap_err(), CheckoutError::SubmissionFailed));
        assert!(matches!(second.unwrap_err(), CheckoutError::SubmissionFailed));
        assert!(!use_case.guard.is_submitting(cart_id));
    }

    #[tokio::test]
    async fn should_return_order_even_when_cart_reset_fails() {
        let session = filled_session();
        let cart_id = session.id;
        let mut carts = carts_holding(session);
        carts
            .expect_save()
            .returning(|_| Err(RepositoryError::database("session store unavailable")));
        let mut orders = MockOrderRepo::new();
        orders
            .expect_insert()
            .times(1)
            .returning(|payload| Ok(persisted_order(payload)));

        let result = use_case(carts, orders)
            .execute(PlaceOrderParams {
                cart_id,
                customer: None,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_unknown_cart() {
        let mut carts = MockCartRepo::new();
        carts
            .expect_get()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(carts, MockOrderRepo::new())
            .execute(PlaceOrderParams {
                cart_id: CartId::new(),
                customer: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::CartNotFound));
    }

    /// Order store whose inserts block until released, counting calls.
    struct GatedOrderRepo {
        gate: Arc<Notify>,
        inserts: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl OrderRepository for GatedOrderRepo {
        async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(persisted_order(order))
        }

        async fn list_by_business(
            &self,
            _business_id: &BusinessId,
        ) -> Result<Vec<Order>, RepositoryError> {
            Ok(vec![])
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Order, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    #[tokio::test]
    async fn should_submit_once_when_triggered_twice() {
        let session = filled_session();
        let cart_id = session.id;
        let mut carts = carts_holding(session);
        carts.expect_save().returning(|_| Ok(()));
        let gate = Arc::new(Notify::new());
        let inserts = Arc::new(AtomicUsize::new(0));

        let use_case = use_case(
            carts,
            GatedOrderRepo {
                gate: gate.clone(),
                inserts: inserts.clone(),
            },
        );
        let params = || PlaceOrderParams {
            cart_id,
            customer: None,
        };

        let (first, second, _) = tokio::join!(
            use_case.execute(params()),
            use_case.execute(params()),
            async {
                tokio::task::yield_now().await;
                gate.notify_one();
            }
        );

        assert!(first.is_ok());
        assert!(matches!(second.unwrap_err(), CheckoutError::AlreadySubmitting));
        assert_eq!(inserts.load(Ordering::SeqCst), 1);
        assert!(!use_case.guard.is_submitting(cart_id));
    }

    /// Order store that records every insert without blocking.
    struct CountingOrderRepo {
        inserts: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl OrderRepository for CountingOrderRepo {
        async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(persisted_order(order))
        }

        async fn list_by_business(
            &self,
            _business_id: &BusinessId,
        ) -> Result<Vec<Order>, RepositoryError> {
            Ok(vec![])
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Order, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    /// Cart store backed by one shared session. The first read takes its
    /// snapshot and then stalls until the gate opens; later reads return
    /// immediately.
    struct SlowFirstReadCarts {
        session: Mutex<CartSession>,
        gate: Arc<Notify>,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl CartSessionRepository for SlowFirstReadCarts {
        async fn get(&self, _id: CartId) -> Result<CartSession, RepositoryError> {
            let snapshot = self.session.lock().unwrap().clone();
            if self.reads.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
            }
            Ok(snapshot)
        }

        async fn save(&self, session: &CartSession) -> Result<(), RepositoryError> {
            *self.session.lock().unwrap() = session.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_submit_once_when_second_trigger_arrives_during_cart_read() {
        let session = filled_session();
        let cart_id = session.id;
        let gate = Arc::new(Notify::new());
        let inserts = Arc::new(AtomicUsize::new(0));

        let use_case = use_case(
            SlowFirstReadCarts {
                session: Mutex::new(session),
                gate: gate.clone(),
                reads: AtomicUsize::new(0),
            },
            CountingOrderRepo {
                inserts: inserts.clone(),
            },
        );
        let params = || PlaceOrderParams {
            cart_id,
            customer: None,
        };

        let (first, second, _) = tokio::join!(
            use_case.execute(params()),
            use_case.execute(params()),
            async {
                tokio::task::yield_now().await;
                gate.notify_one();
            }
        );

        assert!(first.is_ok());
        assert!(matches!(second.unwrap_err(), CheckoutError::AlreadySubmitting));
        assert_eq!(inserts.load(Ordering::SeqCst), 1);
        assert!(!use_case.guard.is_submitting(cart_id));
    }

    /// Cart store backed by one shared session.
    struct SharedCarts {
        session: Mutex<CartSession>,
    }

    #[async_trait]
    impl CartSessionRepository for SharedCarts {
        async fn get(&self, _id: CartId) -> Result<CartSession, RepositoryError> {
            Ok(self.session.lock().unwrap().clone())
        }

        async fn save(&self, session: &CartSession) -> Result<(), RepositoryError> {
            *self.session.lock().unwrap() = session.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_refuse_cart_edit_while_order_is_submitting() {
        let session = filled_session();
        let cart_id = session.id;
        let carts = Arc::new(SharedCarts {
            session: Mutex::new(session),
        });
        let gate = Arc::new(Notify::new());
        let inserts = Arc::new(AtomicUsize::new(0));
        let guard = Arc::new(SubmissionGuard::new());

        let checkout = PlaceOrderUseCaseImpl {
            carts: carts.clone(),
            orders: Arc::new(GatedOrderRepo {
                gate: gate.clone(),
                inserts: inserts.clone(),
            }),
            guard: guard.clone(),
            validator: CustomerValidator::default(),
            logger: mock_logger(),
        };
        let edit = UpdateCartQuantityUseCaseImpl {
            repository: carts.clone(),
            guard: guard.clone(),
            logger: mock_logger(),
        };

        let (placed, edited) = tokio::join!(
            checkout.execute(PlaceOrderParams {
                cart_id,
                customer: None,
            }),
            async {
                tokio::task::yield_now().await;
                let result = edit
                    .execute(UpdateCartQuantityParams {
                        cart_id,
                        item_id: MenuItemId::new("drink"),
                        delta: 1,
                    })
                    .await;
                gate.notify_one();
                result
            }
        );

        assert_eq!(placed.unwrap().item_count(), 3);
        assert!(matches!(edited.unwrap_err(), CartError::CheckoutInProgress));
        assert!(carts.session.lock().unwrap().cart.is_empty());
        assert_eq!(inserts.load(Ordering::SeqCst), 1);
    }
}
