use chrono::{DateTime, Utc};
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

use business::domain::cart::model::{CartId, CartLine, CartSession, ItemAdded};
use business::domain::checkout::model::{CheckoutState, CustomerInfo};

use crate::api::error::ErrorResponse;

pub fn parse_cart_id(raw: &str) -> Result<CartId, Json<ErrorResponse>> {
    Uuid::parse_str(raw.trim())
        .map(CartId::from)
        .map_err(|_| ErrorResponse::validation("cart.invalid_id"))
}

/// Checkout form fields as typed by the customer.
#[derive(Debug, Clone, Default, Object)]
pub struct CustomerInfoDto {
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub phone: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
}

impl From<CustomerInfoDto> for CustomerInfo {
    fn from(dto: CustomerInfoDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

impl From<CustomerInfo> for CustomerInfoDto {
    fn from(info: CustomerInfo) -> Self {
        Self {
            name: info.name,
            phone: info.phone,
            email: info.email,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub item_id: String,
    pub name: String,
    /// Unit price captured when the item was added
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item.id.to_string(),
            name: line.item.name.clone(),
            price: line.item.price.to_string(),
            quantity: line.quantity,
            subtotal: line.subtotal().to_string(),
            description: line.item.description.clone(),
            image_url: line.item.image_url.clone(),
            category: line.item.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: String,
    pub business_id: String,
    pub currency: String,
    pub lines: Vec<CartLineResponse>,
    /// Units across all lines
    pub item_count: u64,
    pub total: String,
    pub customer: CustomerInfoDto,
    /// "idle" or "submitting"
    pub checkout_state: String,
    pub updated_at: DateTime<Utc>,
}

impl CartResponse {
    pub fn new(session: CartSession, checkout_state: CheckoutState) -> Self {
        Self {
            id: session.id.to_string(),
            business_id: session.business_id.to_string(),
            currency: session.currency.to_string(),
            lines: session.cart.lines().iter().map(Into::into).collect(),
            item_count: session.cart.item_count(),
            total: session.cart.total().to_string(),
            customer: session.customer.into(),
            checkout_state: checkout_state.to_string(),
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Id of a menu item of the cart's store
    pub item_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemResponse {
    pub item_id: String,
    pub name: String,
    /// Quantity of the line after the addition
    pub quantity: u32,
    /// Feedback text for the customer
    pub message: String,
    pub cart: CartResponse,
}

impl AddCartItemResponse {
    pub fn new(added: ItemAdded, cart: CartResponse) -> Self {
        Self {
            item_id: added.item_id.to_string(),
            message: format!("{} added to cart", added.name),
            name: added.name,
            quantity: added.quantity,
            cart,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// Signed change; the line is removed when its quantity drops to zero or below
    pub delta: i64,
}
