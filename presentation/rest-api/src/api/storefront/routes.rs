use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::BusinessId;
use business::domain::storefront::model::StoreLookup;
use business::domain::storefront::use_cases::get::{GetStorefrontParams, GetStorefrontUseCase};
use business::domain::storefront::use_cases::update::{
    UpdateCustomizationParams, UpdateCustomizationUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SupabaseBearer;
use crate::api::storefront::dto::{StorefrontResponse, UpdateCustomizationRequest};
use crate::api::tags::ApiTags;

pub struct StorefrontApi {
    get_use_case: Arc<dyn GetStorefrontUseCase>,
    update_use_case: Arc<dyn UpdateCustomizationUseCase>,
}

impl StorefrontApi {
    pub fn new(
        get_use_case: Arc<dyn GetStorefrontUseCase>,
        update_use_case: Arc<dyn UpdateCustomizationUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
        }
    }

    async fn lookup(&self, lookup: StoreLookup) -> GetStorefrontResponse {
        match self.get_use_case.execute(GetStorefrontParams { lookup }).await {
            Ok(store) => GetStorefrontResponse::Ok(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetStorefrontResponse::NotFound(json),
                    _ => GetStorefrontResponse::InternalError(json),
                }
            }
        }
    }
}

/// Storefront API
///
/// Public storefront pages and the owner's branding settings.
#[OpenApi]
impl StorefrontApi {
    /// Get a storefront by business id
    #[oai(path = "/stores/:business_id", method = "get", tag = "ApiTags::Storefront")]
    async fn get_by_business_id(&self, business_id: Path<String>) -> GetStorefrontResponse {
        self.lookup(StoreLookup::ByBusinessId(BusinessId::new(business_id.0)))
            .await
    }

    /// Get a storefront by its public name
    #[oai(
        path = "/stores/by-name/:public_name",
        method = "get",
        tag = "ApiTags::Storefront"
    )]
    async fn get_by_public_name(&self, public_name: Path<String>) -> GetStorefrontResponse {
        self.lookup(StoreLookup::ByPublicName(public_name.0)).await
    }

    /// Update the owner's storefront customization
    ///
    /// Creates the customization on first save.
    #[oai(path = "/customization", method = "put", tag = "ApiTags::Storefront")]
    async fn update_customization(
        &self,
        auth: SupabaseBearer,
        body: Json<UpdateCustomizationRequest>,
    ) -> UpdateCustomizationResponse {
        let params = UpdateCustomizationParams {
            business_id: BusinessId::new(auth.0),
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(store) => UpdateCustomizationResponse::Ok(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCustomizationResponse::BadRequest(json),
                    409 => UpdateCustomizationResponse::Conflict(json),
                    _ => UpdateCustomizationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStorefrontResponse {
    #[oai(status = 200)]
    Ok(Json<StorefrontResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCustomizationResponse {
    #[oai(status = 200)]
    Ok(Json<StorefrontResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
