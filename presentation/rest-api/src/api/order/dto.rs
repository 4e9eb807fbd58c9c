use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::feed::OrderNotification;
use business::domain::order::model::{Order, OrderItem};

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub id: String,
    pub name: String,
    /// Unit price at submission time
    pub price: String,
    pub quantity: u32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price.to_string(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    pub business_id: String,
    pub customer_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub customer_phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub customer_email: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub item_count: u64,
    pub total_amount: String,
    pub currency: String,
    /// pending, completed or cancelled
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let item_count = order.item_count();
        Self {
            id: order.id.to_string(),
            business_id: order.business_id.to_string(),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_email: order.customer_email,
            items: order.items.into_iter().map(Into::into).collect(),
            item_count,
            total_amount: order.total_amount.to_string(),
            currency: order.currency.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// One event of the live order stream.
///
/// The first event has kind "snapshot" and carries the order history, most
/// recent first. Every later event has kind "new_order" and carries exactly
/// the order that just arrived.
#[derive(Debug, Clone, Object)]
pub struct OrderFeedEvent {
    pub kind: String,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    pub orders: Vec<OrderResponse>,
}

impl OrderFeedEvent {
    pub fn snapshot(orders: Vec<OrderResponse>) -> Self {
        Self {
            kind: "snapshot".to_string(),
            message: None,
            orders,
        }
    }

    pub fn new_order(notification: OrderNotification, order: Order) -> Self {
        Self {
            kind: "new_order".to_string(),
            message: Some(notification.message),
            orders: vec![order.into()],
        }
    }
}
