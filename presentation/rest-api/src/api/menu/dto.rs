use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::menu::model::{MenuItem, NewMenuItemProps};
use business::domain::menu::use_cases::get::Menu;

#[derive(Debug, Clone, Object)]
pub struct MenuItemResponse {
    /// Menu item identifier, unique within the store
    pub id: String,
    pub name: String,
    /// Decimal amount in the store currency, e.g. "12.50"
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price.to_string(),
            description: item.description,
            image_url: item.image_url,
            category: item.category,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MenuResponse {
    /// ISO currency code of every price in the menu
    pub currency: String,
    pub items: Vec<MenuItemResponse>,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            currency: menu.currency.to_string(),
            items: menu.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MenuItemRequest {
    /// Existing id to keep; a fresh id is generated when omitted or blank
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Item name (cannot be empty)
    pub name: String,
    /// Decimal amount, e.g. "12.50" (cannot be negative)
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SaveMenuRequest {
    /// Full menu; replaces the stored one
    pub items: Vec<MenuItemRequest>,
}

pub const INVALID_PRICE: &str = "menu.invalid_price";

pub fn parse_price(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}

impl TryFrom<MenuItemRequest> for NewMenuItemProps {
    type Error = &'static str;

    fn try_from(request: MenuItemRequest) -> Result<Self, Self::Error> {
        let price = parse_price(&request.price).ok_or(INVALID_PRICE)?;
        Ok(Self {
            id: request.id,
            name: request.name,
            price,
            description: request.description,
            image_url: request.image_url,
            category: request.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::menu::model::MenuItemId;

    fn request(price: &str) -> MenuItemRequest {
        MenuItemRequest {
            id: None,
            name: "Jollof Rice".to_string(),
            price: price.to_string(),
            description: None,
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn should_parse_decimal_price_string() {
        let props = NewMenuItemProps::try_from(request(" 12.50 ")).unwrap();

        assert_eq!(props.price, BigDecimal::from_str("12.5").unwrap());
    }

    #[test]
    fn should_reject_price_when_not_a_number() {
        for price in ["", "twelve", "12,50"] {
            let result = NewMenuItemProps::try_from(request(price));
            assert_eq!(result.err(), Some(INVALID_PRICE), "{price:?} should be rejected");
        }
    }

    #[test]
    fn should_render_price_without_losing_scale() {
        let item = MenuItem::from_repository(
            MenuItemId::new("coffee"),
            "Coffee".to_string(),
            BigDecimal::from_str("0.10").unwrap(),
            None,
            None,
            Some("Drinks".to_string()),
        );

        let response = MenuItemResponse::from(item);

        assert_eq!(response.price, "0.10");
        assert_eq!(response.category.as_deref(), Some("Drinks"));
    }
}
