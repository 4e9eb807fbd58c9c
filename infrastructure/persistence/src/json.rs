//! Conversion between the JSONB columns (`menu_items`, `orders.items`) and
//! domain types. Rows written by older clients are loosely typed, so prices
//! are accepted as JSON numbers or numeric strings. Anything else is
//! reported as `RepositoryError::InvalidData` instead of being coerced.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::menu::model::{MenuItem, MenuItemId, PRICE_SCALE, fits_price_scale};
use business::domain::order::model::OrderItem;

#[derive(Debug, Serialize, Deserialize)]
struct MenuItemRecord {
    id: Value,
    name: String,
    price: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OrderItemRecord {
    id: Value,
    name: String,
    price: Value,
    quantity: Value,
}

fn parse_id(value: &Value) -> Result<MenuItemId, RepositoryError> {
    match value {
        Value::String(id) if !id.trim().is_empty() => Ok(MenuItemId::new(id.clone())),
        Value::Number(id) => Ok(MenuItemId::new(id.to_string())),
        other => Err(RepositoryError::invalid_data(format!(
            "item id must be a non-empty string, got {}",
            other
        ))),
    }
}

fn parse_price(value: &Value) -> Result<BigDecimal, RepositoryError> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(RepositoryError::invalid_data(format!(
                "price must be numeric, got {}",
                other
            )));
        }
    };
    let price = BigDecimal::from_str(&raw)
        .map_err(|_| RepositoryError::invalid_data(format!("price {:?} is not a number", raw)))?;
    if price < BigDecimal::from(0) {
        return Err(RepositoryError::invalid_data(format!("price {} is negative", price)));
    }
    if !fits_price_scale(&price) {
        return Err(RepositoryError::invalid_data(format!(
            "price {} has more than {} decimal places",
            price, PRICE_SCALE
        )));
    }
    Ok(price)
}

fn price_to_json(price: &BigDecimal) -> Result<Value, RepositoryError> {
    serde_json::Number::from_str(&price.to_string())
        .map(Value::Number)
        .map_err(|_| RepositoryError::invalid_data(format!("price {} is not representable", price)))
}

fn parse_quantity(value: &Value) -> Result<u32, RepositoryError> {
    value
        .as_u64()
        .and_then(|q| u32::try_from(q).ok())
        .filter(|q| *q >= 1)
        .ok_or_else(|| {
            RepositoryError::invalid_data(format!("quantity must be a positive integer, got {}", value))
        })
}

/// A missing or `null` column is an empty menu.
pub fn menu_items_from_json(value: Option<Value>) -> Result<Vec<MenuItem>, RepositoryError> {
    let records: Vec<MenuItemRecord> = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| RepositoryError::invalid_data(format!("menu_items: {}", e)))?,
    };

    records
        .into_iter()
        .map(|record| {
            Ok(MenuItem::from_repository(
                parse_id(&record.id)?,
                record.name,
                parse_price(&record.price)?,
                record.description,
                record.image_url,
                record.category,
            ))
        })
        .collect()
}

pub fn menu_items_to_json(items: &[MenuItem]) -> Result<Value, RepositoryError> {
    let records = items
        .iter()
        .map(|item| {
            Ok(MenuItemRecord {
                id: Value::String(item.id.to_string()),
                name: item.name.clone(),
                price: price_to_json(&item.price)?,
                description: item.description.clone(),
                image_url: item.image_url.clone(),
                category: item.category.clone(),
            })
        })
        .collect::<Result<Vec<_>, RepositoryError>>()?;

    serde_json::to_value(records).map_err(|e| RepositoryError::invalid_data(e.to_string()))
}

pub fn order_items_from_json(value: Value) -> Result<Vec<OrderItem>, RepositoryError> {
    let records: Vec<OrderItemRecord> = serde_json::from_value(value)
        .map_err(|e| RepositoryError::invalid_data(format!("order items: {}", e)))?;

    records
        .into_iter()
        .map(|record| {
            Ok(OrderItem {
                id: parse_id(&record.id)?,
                name: record.name,
                price: parse_price(&record.price)?,
                quantity: parse_quantity(&record.quantity)?,
            })
        })
        .collect()
}

pub fn order_items_to_json(items: &[OrderItem]) -> Result<Value, RepositoryError> {
    let records = items
        .iter()
        .map(|item| {
            Ok(OrderItemRecord {
                id: Value::String(item.id.to_string()),
                name: item.name.clone(),
                price: price_to_json(&item.price)?,
                quantity: Value::from(item.quantity),
            })
        })
        .collect::<Result<Vec<_>, RepositoryError>>()?;

    serde_json::to_value(records).map_err(|e| RepositoryError::invalid_data(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_read_numeric_and_string_prices() {
        let items = menu_items_from_json(Some(json!([
            { "id": "rice", "name": "Jollof Rice", "price": 1500, "category": "Mains" },
            { "id": "zobo", "name": "Zobo", "price": "300.50" }
        ])))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, BigDecimal::from(1500));
        assert_eq!(items[0].category.as_deref(), Some("Mains"));
        assert_eq!(items[1].price, BigDecimal::from_str("300.50").unwrap());
        assert_eq!(items[1].description, None);
    }

    #[test]
    fn should_treat_null_menu_as_empty() {
        assert!(menu_items_from_json(None).unwrap().is_empty());
        assert!(menu_items_from_json(Some(Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn should_reject_menu_item_without_price() {
        let result = menu_items_from_json(Some(json!([{ "id": "rice", "name": "Jollof Rice" }])));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let result = menu_items_from_json(Some(json!([
            { "id": "rice", "name": "Jollof Rice", "price": "free" }
        ])));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn should_reject_negative_stored_price() {
        let result = menu_items_from_json(Some(json!([
            { "id": "rice", "name": "Jollof Rice", "price": -1500 }
        ])));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn should_reject_stored_price_finer_than_cents() {
        let result = menu_items_from_json(Some(json!([
            { "id": "zobo", "name": "Zobo", "price": "300.505" }
        ])));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn should_reject_menu_that_is_not_a_list() {
        let result = menu_items_from_json(Some(json!({ "rice": 1500 })));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn should_write_prices_as_json_numbers() {
        let items = vec![MenuItem::from_repository(
            MenuItemId::new("zobo"),
            "Zobo".to_string(),
            BigDecimal::from_str("300.50").unwrap(),
            None,
            None,
            None,
        )];

        let value = menu_items_to_json(&items).unwrap();

        assert_eq!(value, json!([{ "id": "zobo", "name": "Zobo", "price": 300.5 }]));
    }

    #[test]
    fn should_reject_order_item_with_zero_quantity() {
        let result = order_items_from_json(json!([
            { "id": "rice", "name": "Jollof Rice", "price": 10, "quantity": 0 }
        ]));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn should_read_order_items() {
        let items = order_items_from_json(json!([
            { "id": "rice", "name": "Jollof Rice", "price": 10, "quantity": 2 }
        ]))
        .unwrap();

        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].id.as_str(), "rice");
    }
}
