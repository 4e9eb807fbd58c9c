use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::menu::model::MenuItemId;
use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};

/// Lifecycle of an order. Orders are created `pending`; any later transition
/// happens outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// Line of a submitted order, copied from the cart at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

/// Payload handed to the order repository on checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub business_id: BusinessId,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: BigDecimal,
    pub currency: CurrencyCode,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub business_id: BusinessId,
    pub customer_name: String,
    /// Nullable in storage; always present for orders placed through checkout.
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: BigDecimal,
    pub currency: CurrencyCode,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        business_id: BusinessId,
        customer_name: String,
        customer_phone: Option<String>,
        customer_email: Option<String>,
        items: Vec<OrderItem>,
        total_amount: BigDecimal,
        currency: CurrencyCode,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            business_id,
            customer_name,
            customer_phone,
            customer_email,
            items,
            total_amount,
            currency,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_status_case_insensitively() {
        assert_eq!("Pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!("cancelled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn should_display_status_as_stored() {
        assert_eq!(OrderStatus::Completed.to_string(), "completed");
    }
}
