use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{NewOrder, Order};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::BusinessId;

use super::entity::OrderEntity;
use crate::errors::{map_read_error, map_write_error};
use crate::json::order_items_to_json;

const ORDER_COLUMNS: &str = "id, business_id, customer_name, customer_phone, customer_email, items, total_amount, currency, status, created_at, updated_at";

#[derive(Clone)]
pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let items = order_items_to_json(&order.items)?;

        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            r#"INSERT INTO orders (business_id, customer_name, customer_phone, customer_email, items, total_amount, currency, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}"#,
            ORDER_COLUMNS
        ))
        .bind(order.business_id.as_str())
        .bind(&order.customer_name)
        .bind(&order.customer_phone)
        .bind(&order.customer_email)
        .bind(items)
        .bind(&order.total_amount)
        .bind(order.currency.as_str())
        .bind(order.status.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        entity.into_domain()
    }

    async fn list_by_business(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE business_id = $1 ORDER BY created_at DESC",
            ORDER_COLUMNS
        ))
        .bind(business_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE id = $1",
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }
}
