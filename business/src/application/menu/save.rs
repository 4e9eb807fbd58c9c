use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::use_cases::get::Menu;
use crate::domain::menu::use_cases::save::{SaveMenuParams, SaveMenuUseCase};
use crate::domain::storefront::model::StoreCustomization;
use crate::domain::storefront::repository::StoreCustomizationRepository;

pub struct SaveMenuUseCaseImpl {
    pub repository: Arc<dyn StoreCustomizationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveMenuUseCase for SaveMenuUseCaseImpl {
    async fn execute(&self, params: SaveMenuParams) -> Result<Menu, MenuError> {
        self.logger.info(&format!(
            "Saving {} menu items for business {}",
            params.items.len(),
            params.business_id
        ));

        let items = params
            .items
            .into_iter()
            .map(MenuItem::new)
            .collect::<Result<Vec<_>, _>>()?;

        let mut ids = HashSet::with_capacity(items.len());
        if let Some(duplicate) = items.iter().find(|item| !ids.insert(&item.id)) {
            return Err(MenuError::DuplicateItemId(duplicate.id.to_string()));
        }

        let mut customization = self
            .repository
            .find_by_business_id(&params.business_id)
            .await?
            .unwrap_or_else(|| StoreCustomization::new(params.business_id.clone()));

        customization.menu_items = items;
        customization.updated_at = Utc::now();
        self.repository.save(&customization).await?;

        Ok(Menu {
            items: customization.menu_items,
            currency: customization.currency,
        })
    }
}
