use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::model::CartSession;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::set_customer::{
    SetCartCustomerParams, SetCartCustomerUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::checkout::model::SubmissionGuard;
use business::domain::menu::model::MenuItemId;
use business::domain::shared::value_objects::BusinessId;

use crate::api::cart::dto::{
    AddCartItemRequest, AddCartItemResponse, CartResponse, CustomerInfoDto,
    UpdateQuantityRequest, parse_cart_id,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    set_customer_use_case: Arc<dyn SetCartCustomerUseCase>,
    guard: Arc<SubmissionGuard>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        set_customer_use_case: Arc<dyn SetCartCustomerUseCase>,
        guard: Arc<SubmissionGuard>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            set_customer_use_case,
            guard,
        }
    }

    fn to_response(&self, session: CartSession) -> CartResponse {
        let state = self.guard.state_of(session.id);
        CartResponse::new(session, state)
    }
}

/// Cart API
///
/// Public endpoints backing a customer's browsing session on a storefront.
#[OpenApi]
impl CartApi {
    /// Open a cart on a storefront
    ///
    /// The cart remembers the store currency at this moment.
    #[oai(
        path = "/stores/:business_id/carts",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn create(&self, business_id: Path<String>) -> CreateCartResponse {
        let params = CreateCartParams {
            business_id: BusinessId::new(business_id.0),
        };

        match self.create_use_case.execute(params).await {
            Ok(session) => CreateCartResponse::Created(Json(self.to_response(session))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CreateCartResponse::NotFound(json),
                    _ => CreateCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a cart
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get(&self, id: Path<String>) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };

        match self.get_use_case.execute(GetCartParams { cart_id }).await {
            Ok(session) => CartResult::Ok(Json(self.to_response(session))),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Add one unit of a menu item
    ///
    /// Adding an item already in the cart increments its quantity. Edits are
    /// refused with 409 while the cart is being checked out.
    #[oai(path = "/carts/:id/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(&self, id: Path<String>, body: Json<AddCartItemRequest>) -> AddItemResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return AddItemResult::BadRequest(json),
        };

        let params = AddCartItemParams {
            cart_id,
            item_id: MenuItemId::new(body.0.item_id.trim()),
        };

        match self.add_item_use_case.execute(params).await {
            Ok((session, added)) => {
                let cart = self.to_response(session);
                AddItemResult::Ok(Json(AddCartItemResponse::new(added, cart)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemResult::NotFound(json),
                    409 => AddItemResult::Conflict(json),
                    _ => AddItemResult::InternalError(json),
                }
            }
        }
    }

    /// Change the quantity of a cart line
    ///
    /// The line is removed when its quantity reaches zero. Unknown items are
    /// ignored.
    #[oai(
        path = "/carts/:id/items/:item_id",
        method = "patch",
        tag = "ApiTags::Carts"
    )]
    async fn update_quantity(
        &self,
        id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };

        let params = UpdateCartQuantityParams {
            cart_id,
            item_id: MenuItemId::new(item_id.0),
            delta: body.0.delta,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(session) => CartResult::Ok(Json(self.to_response(session))),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }

    /// Save the checkout form
    ///
    /// Stored as typed; fields are only validated at checkout.
    #[oai(path = "/carts/:id/customer", method = "put", tag = "ApiTags::Carts")]
    async fn set_customer(&self, id: Path<String>, body: Json<CustomerInfoDto>) -> CartResult {
        let cart_id = match parse_cart_id(&id.0) {
            Ok(cart_id) => cart_id,
            Err(json) => return CartResult::BadRequest(json),
        };

        let params = SetCartCustomerParams {
            cart_id,
            customer: body.0.into(),
        };

        match self.set_customer_use_case.execute(params).await {
            Ok(session) => CartResult::Ok(Json(self.to_response(session))),
            Err(err) => CartResult::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResult {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => CartResult::NotFound(json),
            409 => CartResult::Conflict(json),
            _ => CartResult::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResult {
    #[oai(status = 200)]
    Ok(Json<AddCartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
