use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::BusinessId;
use business::domain::storefront::model::StoreCustomization;
use business::domain::storefront::repository::StoreCustomizationRepository;

use super::entity::StoreCustomizationEntity;
use crate::errors::{map_read_error, map_write_error};
use crate::json::menu_items_to_json;

const SELECT_CUSTOMIZATION: &str = r#"SELECT c.id, c.business_id, p.business_name, c.public_name, c.logo_url,
    c.primary_color, c.secondary_color, c.header_color, c.background_color,
    c.body_background_color, c.text_color, c.button_color, c.button_text_color,
    c.item_title_color, c.description_color, c.currency, c.menu_items,
    c.business_description, c.business_address, c.contact_number,
    c.created_at, c.updated_at
FROM business_customizations c
LEFT JOIN profiles p ON p.id = c.business_id"#;

pub struct StoreCustomizationRepositoryPostgres {
    pool: PgPool,
}

impl StoreCustomizationRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreCustomizationRepository for StoreCustomizationRepositoryPostgres {
    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<StoreCustomization>, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreCustomizationEntity>(&format!(
            "{} WHERE c.business_id = $1",
            SELECT_CUSTOMIZATION
        ))
        .bind(business_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn find_by_public_name(
        &self,
        public_name: &str,
    ) -> Result<Option<StoreCustomization>, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreCustomizationEntity>(&format!(
            "{} WHERE c.public_name = $1",
            SELECT_CUSTOMIZATION
        ))
        .bind(public_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save(&self, customization: &StoreCustomization) -> Result<(), RepositoryError> {
        let menu_items = menu_items_to_json(&customization.menu_items)?;
        let colors = &customization.colors;

        sqlx::query(
            r#"INSERT INTO business_customizations (
                id, business_id, public_name, logo_url,
                primary_color, secondary_color, header_color, background_color,
                body_background_color, text_color, button_color, button_text_color,
                item_title_color, description_color, currency, menu_items,
                business_description, business_address, contact_number,
                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            ON CONFLICT (business_id) DO UPDATE SET
                public_name = EXCLUDED.public_name,
                logo_url = EXCLUDED.logo_url,
                primary_color = EXCLUDED.primary_color,
                secondary_color = EXCLUDED.secondary_color,
                header_color = EXCLUDED.header_color,
                background_color = EXCLUDED.background_color,
                body_background_color = EXCLUDED.body_background_color,
                text_color = EXCLUDED.text_color,
                button_color = EXCLUDED.button_color,
                button_text_color = EXCLUDED.button_text_color,
                item_title_color = EXCLUDED.item_title_color,
                description_color = EXCLUDED.description_color,
                currency = EXCLUDED.currency,
                menu_items = EXCLUDED.menu_items,
                business_description = EXCLUDED.business_description,
                business_address = EXCLUDED.business_address,
                contact_number = EXCLUDED.contact_number,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(customization.id)
        .bind(customization.business_id.as_str())
        .bind(&customization.public_name)
        .bind(&customization.logo_url)
        .bind(&colors.primary)
        .bind(&colors.secondary)
        .bind(&colors.header)
        .bind(&colors.background)
        .bind(&colors.body_background)
        .bind(&colors.text)
        .bind(&colors.button)
        .bind(&colors.button_text)
        .bind(&colors.item_title)
        .bind(&colors.description)
        .bind(customization.currency.as_str())
        .bind(menu_items)
        .bind(&customization.business_description)
        .bind(&customization.business_address)
        .bind(&customization.contact_number)
        .bind(customization.created_at)
        .bind(customization.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
