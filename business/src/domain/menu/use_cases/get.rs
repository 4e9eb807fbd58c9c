use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::shared::value_objects::{BusinessId, CurrencyCode};

pub struct GetMenuParams {
    pub business_id: BusinessId,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    pub currency: CurrencyCode,
}

#[async_trait]
pub trait GetMenuUseCase: Send + Sync {
    async fn execute(&self, params: GetMenuParams) -> Result<Menu, MenuError>;
}
