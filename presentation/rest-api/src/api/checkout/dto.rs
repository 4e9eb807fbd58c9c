use poem_openapi::Object;

use crate::api::cart::dto::CustomerInfoDto;

#[derive(Debug, Clone, Default, Object)]
pub struct PlaceOrderRequest {
    /// Replaces the form saved on the cart; the saved form is used when omitted
    #[oai(skip_serializing_if_is_none)]
    pub customer: Option<CustomerInfoDto>,
}
