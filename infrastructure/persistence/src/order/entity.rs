use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderStatus};
use business::domain::shared::value_objects::{BusinessId, CurrencyCode};

use crate::json::order_items_from_json;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub business_id: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub items: Value,
    pub total_amount: BigDecimal,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(RepositoryError::invalid_data)?;

        Ok(Order::from_repository(
            self.id,
            BusinessId::new(self.business_id),
            self.customer_name,
            self.customer_phone,
            self.customer_email,
            order_items_from_json(self.items)?,
            self.total_amount,
            CurrencyCode::or_default(Some(&self.currency)),
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}
