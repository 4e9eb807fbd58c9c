use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use futures::stream::BoxStream;
use poem_openapi::{
    OpenApi,
    payload::{EventStream, Json},
};

use business::domain::order::use_cases::list::{ListOrdersParams, ListOrdersUseCase};
use business::domain::order::use_cases::watch::{WatchOrdersParams, WatchOrdersUseCase};
use business::domain::shared::value_objects::BusinessId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderFeedEvent, OrderResponse};
use crate::api::security::SupabaseBearer;
use crate::api::tags::ApiTags;

const KEEP_ALIVE: Duration = Duration::from_secs(15);

pub struct OrderApi {
    list_use_case: Arc<dyn ListOrdersUseCase>,
    watch_use_case: Arc<dyn WatchOrdersUseCase>,
}

impl OrderApi {
    pub fn new(
        list_use_case: Arc<dyn ListOrdersUseCase>,
        watch_use_case: Arc<dyn WatchOrdersUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            watch_use_case,
        }
    }
}

/// Orders API
///
/// Owner endpoints for order history and the live order feed.
#[OpenApi]
impl OrderApi {
    /// List the owner's orders, most recent first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn list(&self, auth: SupabaseBearer) -> ListOrdersResponse {
        let params = ListOrdersParams {
            business_id: BusinessId::new(auth.0),
        };

        match self.list_use_case.execute(params).await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
                ListOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListOrdersResponse::InternalError(json)
            }
        }
    }

    /// Stream new orders (Server-Sent Events)
    ///
    /// Sends the current history first, then one event per new order.
    /// Closing the connection releases the subscription.
    #[oai(path = "/orders/stream", method = "get", tag = "ApiTags::Orders")]
    async fn stream(&self, auth: SupabaseBearer) -> OrderStreamResponse {
        let business_id = BusinessId::new(auth.0);
        let params = WatchOrdersParams {
            business_id: business_id.clone(),
        };

        let mut live = match self.watch_use_case.execute(params).await {
            Ok(live) => live,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    503 => OrderStreamResponse::Unavailable(json),
                    _ => OrderStreamResponse::InternalError(json),
                };
            }
        };

        let snapshot =
            OrderFeedEvent::snapshot(live.feed().orders().cloned().map(Into::into).collect());

        let events = async_stream::stream! {
            yield snapshot;
            while let Some((notification, order)) = live.next().await {
                yield OrderFeedEvent::new_order(notification, order);
            }
            tracing::info!(
                "Order stream for business {} ended, {} deliveries skipped",
                business_id,
                live.dropped()
            );
        };

        OrderStreamResponse::Ok(EventStream::new(events.boxed()).keep_alive(KEEP_ALIVE))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderStreamResponse {
    #[oai(status = 200)]
    Ok(EventStream<BoxStream<'static, OrderFeedEvent>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}
