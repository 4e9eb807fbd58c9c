use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::NewMenuItemProps;
use crate::domain::shared::value_objects::BusinessId;

use super::get::Menu;

/// Replaces the whole menu of a business.
pub struct SaveMenuParams {
    pub business_id: BusinessId,
    pub items: Vec<NewMenuItemProps>,
}

#[async_trait]
pub trait SaveMenuUseCase: Send + Sync {
    async fn execute(&self, params: SaveMenuParams) -> Result<Menu, MenuError>;
}
