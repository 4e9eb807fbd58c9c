use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::StorefrontError;
use crate::domain::menu::model::{MenuItem, MenuItemId};
use crate::domain::shared::text::non_blank;
use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex"));

// 3 to 63 chars, no leading or trailing hyphen.
static PUBLIC_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9-]{1,61}[a-z0-9]$").expect("valid public name regex")
});

const FALLBACK_DISPLAY_NAME: &str = "Our Store";

/// How a storefront is addressed from a public URL.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreLookup {
    ByBusinessId(BusinessId),
    ByPublicName(String),
}

impl std::fmt::Display for StoreLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreLookup::ByBusinessId(id) => write!(f, "business {}", id),
            StoreLookup::ByPublicName(name) => write!(f, "public name {}", name),
        }
    }
}

/// Color tokens of a branded storefront. Every token is an optional CSS hex color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub header: Option<String>,
    pub background: Option<String>,
    pub body_background: Option<String>,
    pub text: Option<String>,
    pub button: Option<String>,
    pub button_text: Option<String>,
    pub item_title: Option<String>,
    pub description: Option<String>,
}

impl BrandColors {
    /// Applies the tokens present in `changes`; a blank token resets it.
    fn merge(&mut self, changes: BrandColors) -> Result<(), StorefrontError> {
        let slots: [(&'static str, &mut Option<String>, Option<String>); 10] = [
            ("primary", &mut self.primary, changes.primary),
            ("secondary", &mut self.secondary, changes.secondary),
            ("header", &mut self.header, changes.header),
            ("background", &mut self.background, changes.background),
            ("body_background", &mut self.body_background, changes.body_background),
            ("text", &mut self.text, changes.text),
            ("button", &mut self.button, changes.button),
            ("button_text", &mut self.button_text, changes.button_text),
            ("item_title", &mut self.item_title, changes.item_title),
            ("description", &mut self.description, changes.description),
        ];

        for (field, slot, change) in slots {
            let Some(value) = change else { continue };
            let value = value.trim();
            if value.is_empty() {
                *slot = None;
            } else if HEX_COLOR.is_match(value) {
                *slot = Some(value.to_lowercase());
            } else {
                return Err(StorefrontError::InvalidColor(field));
            }
        }
        Ok(())
    }
}

/// Per-business branding and catalog (1:1 with a business).
#[derive(Debug, Clone)]
pub struct StoreCustomization {
    pub id: Uuid,
    pub business_id: BusinessId,
    /// Joined from the owner profile; read-only here.
    pub business_name: Option<String>,
    pub public_name: Option<String>,
    pub logo_url: Option<String>,
    pub colors: BrandColors,
    pub currency: CurrencyCode,
    pub menu_items: Vec<MenuItem>,
    pub business_description: Option<String>,
    pub business_address: Option<String>,
    pub contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a customization. `None` keeps the stored value,
/// `Some("")` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct CustomizationChanges {
    pub public_name: Option<String>,
    pub logo_url: Option<String>,
    pub colors: BrandColors,
    pub currency: Option<String>,
    pub business_description: Option<String>,
    pub business_address: Option<String>,
    pub contact_number: Option<String>,
}

impl StoreCustomization {
    /// Empty customization created the first time an owner saves anything.
    pub fn new(business_id: BusinessId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            business_id,
            business_name: None,
            public_name: None,
            logo_url: None,
            colors: BrandColors::default(),
            currency: CurrencyCode::default(),
            menu_items: Vec::new(),
            business_description: None,
            business_address: None,
            contact_number: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_menu_item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| &item.id == id)
    }

    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .or(self.public_name.as_deref())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    /// Validates and applies `changes`. Nothing is modified when any field is invalid.
    pub fn apply(&mut self, changes: CustomizationChanges) -> Result<(), StorefrontError> {
        let mut next = self.clone();

        next.colors.merge(changes.colors)?;

        if let Some(public_name) = changes.public_name {
            next.public_name = match non_blank(Some(public_name)) {
                Some(name) => {
                    let name = name.to_lowercase();
                    if !PUBLIC_NAME.is_match(&name) {
                        return Err(StorefrontError::InvalidPublicName);
                    }
                    Some(name)
                }
                None => None,
            };
        }

        if let Some(logo_url) = changes.logo_url {
            next.logo_url = match non_blank(Some(logo_url)) {
                Some(raw) => {
                    let parsed = url::Url::parse(&raw).map_err(|_| StorefrontError::InvalidLogoUrl)?;
                    if !matches!(parsed.scheme(), "http" | "https") {
                        return Err(StorefrontError::InvalidLogoUrl);
                    }
                    Some(parsed.to_string())
                }
                None => None,
            };
        }

        if let Some(currency) = changes.currency {
            next.currency = CurrencyCode::parse(&currency).ok_or(StorefrontError::InvalidCurrency)?;
        }

        if let Some(description) = changes.business_description {
            next.business_description = non_blank(Some(description));
        }
        if let Some(address) = changes.business_address {
            next.business_address = non_blank(Some(address));
        }
        if let Some(contact) = changes.contact_number {
            next.contact_number = non_blank(Some(contact));
        }

        next.updated_at = Utc::now();
        *self = next;
        Ok(())
    }
}
