use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::checkout::model::CustomerInfo;
use crate::domain::menu::model::{MenuItem, MenuItemId};
use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(Uuid);

impl CartId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CartId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A menu item snapshot with the selected quantity. Quantity is always >= 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> BigDecimal {
        &self.item.price * BigDecimal::from(self.quantity)
    }
}

/// Feedback produced by `Cart::add_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAdded {
    pub item_id: MenuItemId,
    pub name: String,
    pub quantity: u32,
}

/// Outcome of `Cart::update_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(u32),
    Removed,
    NotInCart,
}

/// The customer's in-progress selection. Lines keep insertion order and
/// hold at most one entry per item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: &MenuItem) -> ItemAdded {
        let quantity = match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    item: item.clone(),
                    quantity: 1,
                });
                1
            }
        };

        ItemAdded {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
        }
    }

    /// Applies `delta` to the line of `item_id`. Dropping to zero or below is
    /// the only way a line leaves the cart.
    pub fn update_quantity(&mut self, item_id: &MenuItemId, delta: i64) -> QuantityChange {
        let Some(index) = self.lines.iter().position(|line| &line.item.id == item_id) else {
            return QuantityChange::NotInCart;
        };

        let next = i64::from(self.lines[index].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(index);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[index].quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    /// Sum of price x quantity over all lines, recomputed on every call.
    pub fn total(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.subtotal())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: &MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.item.id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Server-side browsing session: one cart plus the checkout form, bound to a
/// single storefront. Never persisted.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub id: CartId,
    pub business_id: BusinessId,
    /// Store currency captured when the session started; prices are snapshotted in it.
    pub currency: CurrencyCode,
    pub cart: Cart,
    pub customer: CustomerInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartSession {
    pub fn new(business_id: BusinessId, currency: CurrencyCode) -> Self {
        let now = Utc::now();
        Self {
            id: CartId::new(),
            business_id,
            currency,
            cart: Cart::new(),
            customer: CustomerInfo::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
