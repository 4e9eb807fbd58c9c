use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::cart::dto::parse_cart_id;
use crate::api::checkout::dto::PlaceOrderRequest;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(place_order_use_case: Arc<dyn PlaceOrderUseCase>) -> Self {
        Self {
            place_order_use_case,
        }
    }
}

/// Checkout API
#[OpenApi]
impl CheckoutApi {
    /// Place an order from a cart
    ///
    /// Validates the customer form and submits the cart as a pending order.
    /// On success the cart and the form are emptied. On any failure both are
    /// left as they were so the customer can retry. A second request for a
    /// cart whose order is still being submitted is answered with 409 and
    /// submits nothing.
    #[oai(path = "/carts/:id/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(
        &self,
        id: Path<String>,
        body: Json<PlaceOrderRequest>,
    ) -> PlaceOrderResponse {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return PlaceOrderResponse::BadRequest(json),
        };

        let params = PlaceOrderParams {
            cart_id,
            customer: body.0.customer.map(Into::into),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    404 => PlaceOrderResponse::NotFound(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    502 => PlaceOrderResponse::BadGateway(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
