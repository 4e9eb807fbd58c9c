//! Mocks of the domain ports and small fixtures shared by use case tests.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::{CartId, CartSession};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::{LogLevel, Logger};
use crate::domain::menu::model::{MenuItem, MenuItemId};
use crate::domain::order::model::{NewOrder, Order, OrderStatus};
use crate::domain::order::repository::{OrderRepository, OrderSubscriber};
use crate::domain::order::subscription::OrderSubscription;
use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};
use crate::domain::storefront::model::StoreCustomization;
use crate::domain::storefront::repository::StoreCustomizationRepository;
use crate::domain::team::model::TeamMember;
use crate::domain::team::repository::TeamMemberRepository;

mock! {
    pub Log {}

    impl Logger for Log {
        fn log(&self, level: LogLevel, message: &str);
    }
}

mock! {
    pub StoreRepo {}

    #[async_trait]
    impl StoreCustomizationRepository for StoreRepo {
        async fn find_by_business_id(&self, business_id: &BusinessId) -> Result<Option<StoreCustomization>, RepositoryError>;
        async fn find_by_public_name(&self, public_name: &str) -> Result<Option<StoreCustomization>, RepositoryError>;
        async fn save(&self, customization: &StoreCustomization) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartSessionRepository for CartRepo {
        async fn get(&self, id: CartId) -> Result<CartSession, RepositoryError>;
        async fn save(&self, session: &CartSession) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError>;
        async fn list_by_business(&self, business_id: &BusinessId) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    }
}

mock! {
    pub OrderSub {}

    #[async_trait]
    impl OrderSubscriber for OrderSub {
        async fn subscribe_new_orders(&self, business_id: &BusinessId) -> Result<OrderSubscription, RepositoryError>;
    }
}

mock! {
    pub TeamRepo {}

    #[async_trait]
    impl TeamMemberRepository for TeamRepo {
        async fn list_by_business(&self, business_id: &BusinessId) -> Result<Vec<TeamMember>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid, business_id: &BusinessId) -> Result<TeamMember, RepositoryError>;
        async fn find_by_email(&self, email: &str, business_id: &BusinessId) -> Result<Option<TeamMember>, RepositoryError>;
        async fn save(&self, member: &TeamMember) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid, business_id: &BusinessId) -> Result<(), RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_log().returning(|_, _| ());
    Arc::new(logger)
}

pub fn business_id() -> BusinessId {
    BusinessId::new("owner-1")
}

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal literal")
}

pub fn menu_item(id: &str, name: &str, price: &str) -> MenuItem {
    MenuItem::from_repository(
        MenuItemId::new(id),
        name.to_string(),
        dec(price),
        None,
        None,
        None,
    )
}

pub fn store_with_menu(items: Vec<MenuItem>) -> StoreCustomization {
    let mut store = StoreCustomization::new(business_id());
    store.public_name = Some("mama-put".to_string());
    store.menu_items = items;
    store
}

pub fn persisted_order(payload: &NewOrder) -> Order {
    let now = Utc::now();
    Order::from_repository(
        Uuid::new_v4(),
        payload.business_id.clone(),
        payload.customer_name.clone(),
        Some(payload.customer_phone.clone()),
        payload.customer_email.clone(),
        payload.items.clone(),
        payload.total_amount.clone(),
        payload.currency.clone(),
        payload.status,
        now,
        now,
    )
}

pub fn order_from(customer: &str) -> Order {
    let now = Utc::now();
    Order::from_repository(
        Uuid::new_v4(),
        business_id(),
        customer.to_string(),
        Some("08012345678".to_string()),
        None,
        vec![],
        dec("10"),
        CurrencyCode::default(),
        OrderStatus::Pending,
        now,
        now,
    )
}
