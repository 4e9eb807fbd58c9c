use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::use_cases::get::{GetMenuParams, GetMenuUseCase, Menu};
use crate::domain::shared::value_objects::CurrencyCode;
use crate::domain::storefront::repository::StoreCustomizationRepository;

pub struct GetMenuUseCaseImpl {
    pub repository: Arc<dyn StoreCustomizationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMenuUseCase for GetMenuUseCaseImpl {
    async fn execute(&self, params: GetMenuParams) -> Result<Menu, MenuError> {
        self.logger
            .debug(&format!("Loading menu for business {}", params.business_id));

        // Owners without a saved customization get an empty menu.
        let menu = match self
            .repository
            .find_by_business_id(&params.business_id)
            .await?
        {
            Some(customization) => Menu {
                items: customization.menu_items,
                currency: customization.currency,
            },
            None => Menu {
                items: Vec::new(),
                currency: CurrencyCode::default(),
            },
        };

        Ok(menu)
    }
}
