use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::MenuError;
use crate::domain::shared::text::non_blank;

/// Stable identifier of a menu item, unique within one business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Decimal places a price may carry; order totals are stored at this scale.
pub const PRICE_SCALE: i64 = 2;

/// Whether `price` needs no more than `PRICE_SCALE` decimal places.
/// Trailing zeros do not count.
pub fn fits_price_scale(price: &BigDecimal) -> bool {
    price.normalized().as_bigint_and_exponent().1 <= PRICE_SCALE
}

/// Catalog entry of a storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

pub struct NewMenuItemProps {
    /// Blank or missing ids are replaced by a fresh UUID.
    pub id: Option<String>,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(props: NewMenuItemProps) -> Result<Self, MenuError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(MenuError::NameEmpty);
        }

        if props.price < BigDecimal::zero() {
            return Err(MenuError::NegativePrice);
        }
        if !fits_price_scale(&props.price) {
            return Err(MenuError::PricePrecision);
        }

        let id = non_blank(props.id)
            .map(MenuItemId::new)
            .unwrap_or_else(MenuItemId::generate);

        Ok(Self {
            id,
            name,
            price: props.price,
            description: non_blank(props.description),
            image_url: non_blank(props.image_url),
            category: non_blank(props.category),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: MenuItemId,
        name: String,
        price: BigDecimal,
        description: Option<String>,
        image_url: Option<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
            image_url,
            category,
        }
    }
}
