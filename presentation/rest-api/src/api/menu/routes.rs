use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::menu::model::NewMenuItemProps;
use business::domain::menu::use_cases::get::{GetMenuParams, GetMenuUseCase};
use business::domain::menu::use_cases::save::{SaveMenuParams, SaveMenuUseCase};
use business::domain::shared::value_objects::BusinessId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::{MenuResponse, SaveMenuRequest};
use crate::api::security::SupabaseBearer;
use crate::api::tags::ApiTags;

pub struct MenuApi {
    get_use_case: Arc<dyn GetMenuUseCase>,
    save_use_case: Arc<dyn SaveMenuUseCase>,
}

impl MenuApi {
    pub fn new(get_use_case: Arc<dyn GetMenuUseCase>, save_use_case: Arc<dyn SaveMenuUseCase>) -> Self {
        Self {
            get_use_case,
            save_use_case,
        }
    }
}

/// Menu management API
///
/// Owner endpoints for the catalog shown on the storefront.
#[OpenApi]
impl MenuApi {
    /// Get the owner's menu
    #[oai(path = "/menu", method = "get", tag = "ApiTags::Menu")]
    async fn get_menu(&self, auth: SupabaseBearer) -> GetMenuResponse {
        let params = GetMenuParams {
            business_id: BusinessId::new(auth.0),
        };

        match self.get_use_case.execute(params).await {
            Ok(menu) => GetMenuResponse::Ok(Json(menu.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetMenuResponse::InternalError(json)
            }
        }
    }

    /// Replace the owner's menu
    ///
    /// Items without an id get a generated one. Duplicate ids, blank names
    /// and negative prices reject the whole menu.
    #[oai(path = "/menu", method = "put", tag = "ApiTags::Menu")]
    async fn save_menu(&self, auth: SupabaseBearer, body: Json<SaveMenuRequest>) -> SaveMenuResponse {
        let items: Result<Vec<NewMenuItemProps>, _> =
            body.0.items.into_iter().map(NewMenuItemProps::try_from).collect();
        let items = match items {
            Ok(items) => items,
            Err(message) => return SaveMenuResponse::BadRequest(ErrorResponse::validation(message)),
        };

        let params = SaveMenuParams {
            business_id: BusinessId::new(auth.0),
            items,
        };

        match self.save_use_case.execute(params).await {
            Ok(menu) => SaveMenuResponse::Ok(Json(menu.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveMenuResponse::BadRequest(json),
                    _ => SaveMenuResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMenuResponse {
    #[oai(status = 200)]
    Ok(Json<MenuResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveMenuResponse {
    #[oai(status = 200)]
    Ok(Json<MenuResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
