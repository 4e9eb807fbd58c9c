use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{BusinessId, CurrencyCode};
use business::domain::storefront::model::{BrandColors, StoreCustomization};

use crate::json::menu_items_from_json;

#[derive(Debug, FromRow)]
pub struct StoreCustomizationEntity {
    pub id: Uuid,
    pub business_id: String,
    pub business_name: Option<String>,
    pub public_name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub header_color: Option<String>,
    pub background_color: Option<String>,
    pub body_background_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub item_title_color: Option<String>,
    pub description_color: Option<String>,
    pub currency: Option<String>,
    pub menu_items: Option<Value>,
    pub business_description: Option<String>,
    pub business_address: Option<String>,
    pub contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreCustomizationEntity {
    pub fn into_domain(self) -> Result<StoreCustomization, RepositoryError> {
        let menu_items = menu_items_from_json(self.menu_items)?;

        Ok(StoreCustomization {
            id: self.id,
            business_id: BusinessId::new(self.business_id),
            business_name: self.business_name,
            public_name: self.public_name,
            logo_url: self.logo_url,
            colors: BrandColors {
                primary: self.primary_color,
                secondary: self.secondary_color,
                header: self.header_color,
                background: self.background_color,
                body_background: self.body_background_color,
                text: self.text_color,
                button: self.button_color,
                button_text: self.button_text_color,
                item_title: self.item_title_color,
                description: self.description_color,
            },
            currency: CurrencyCode::or_default(self.currency.as_deref()),
            menu_items,
            business_description: self.business_description,
            business_address: self.business_address,
            contact_number: self.contact_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
