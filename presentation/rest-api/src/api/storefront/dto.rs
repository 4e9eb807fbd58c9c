use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::storefront::model::{BrandColors, CustomizationChanges, StoreCustomization};

use crate::api::menu::dto::MenuItemResponse;

/// Brand color tokens as CSS hex colors (`#rgb` or `#rrggbb`).
#[derive(Debug, Clone, Default, Object)]
pub struct BrandColorsDto {
    #[oai(skip_serializing_if_is_none)]
    pub primary: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub secondary: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub header: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub background: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub body_background: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub text: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub button: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub button_text: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub item_title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<BrandColors> for BrandColorsDto {
    fn from(colors: BrandColors) -> Self {
        Self {
            primary: colors.primary,
            secondary: colors.secondary,
            header: colors.header,
            background: colors.background,
            body_background: colors.body_background,
            text: colors.text,
            button: colors.button,
            button_text: colors.button_text,
            item_title: colors.item_title,
            description: colors.description,
        }
    }
}

impl From<BrandColorsDto> for BrandColors {
    fn from(dto: BrandColorsDto) -> Self {
        Self {
            primary: dto.primary,
            secondary: dto.secondary,
            header: dto.header,
            background: dto.background,
            body_background: dto.body_background,
            text: dto.text,
            button: dto.button,
            button_text: dto.button_text,
            item_title: dto.item_title,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StorefrontResponse {
    pub business_id: String,
    /// Business name, else public name, else a generic fallback
    pub display_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub business_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub public_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub logo_url: Option<String>,
    pub colors: BrandColorsDto,
    pub currency: String,
    pub menu_items: Vec<MenuItemResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub business_description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub business_address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub contact_number: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<StoreCustomization> for StorefrontResponse {
    fn from(store: StoreCustomization) -> Self {
        let display_name = store.display_name().to_string();
        Self {
            business_id: store.business_id.to_string(),
            display_name,
            business_name: store.business_name,
            public_name: store.public_name,
            logo_url: store.logo_url,
            colors: store.colors.into(),
            currency: store.currency.to_string(),
            menu_items: store.menu_items.into_iter().map(Into::into).collect(),
            business_description: store.business_description,
            business_address: store.business_address,
            contact_number: store.contact_number,
            updated_at: store.updated_at,
        }
    }
}

/// Partial update. Omitted fields keep their value, an empty string clears one.
#[derive(Debug, Clone, Object)]
pub struct UpdateCustomizationRequest {
    #[oai(skip_serializing_if_is_none)]
    pub public_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub logo_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub colors: Option<BrandColorsDto>,
    /// Three uppercase letters, e.g. "NGN"
    #[oai(skip_serializing_if_is_none)]
    pub currency: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub business_description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub business_address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub contact_number: Option<String>,
}

impl From<UpdateCustomizationRequest> for CustomizationChanges {
    fn from(request: UpdateCustomizationRequest) -> Self {
        Self {
            public_name: request.public_name,
            logo_url: request.logo_url,
            colors: request.colors.unwrap_or_default().into(),
            currency: request.currency,
            business_description: request.business_description,
            business_address: request.business_address,
            contact_number: request.contact_number,
        }
    }
}
