use super::common::{created_response, decode_json, success_response, validate_input};
use crate::{
    errors::{ApiError, ErrorResponse},
    handlers::AppServices,
    models::{InboundOrder, NewInboundOrder},
};
use axum::{
    extract::{rejection::JsonRejection, FromRef, Json, State},
    response::Response,
    routing::post,
    Router,
};
use tracing::info;

/// Create an inbound order
#[utoipa::path(
    post,
    path = "/api/v1/inboundOrders",
    summary = "Create inbound order",
    description = "Record a new inbound order. All five fields are required; ids must be non-zero.",
    request_body = NewInboundOrder,
    responses(
        (status = 201, description = "Inbound order created", body = InboundOrder,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 409, description = "The store rejected the order", body = ErrorResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse),
    ),
    tag = "inbound-orders"
)]
pub async fn create_inbound_order(
    State(services): State<AppServices>,
    payload: Result<Json<NewInboundOrder>, JsonRejection>,
) -> Result<Response, ApiError> {
    let payload = decode_json(payload)?;
    validate_input(&payload)?;

    let order = services
        .inbound_orders
        .create(payload.into())
        .await
        .map_err(ApiError::Conflict)?;

    info!(id = order.id, order_number = %order.order_number, "Inbound order created");

    Ok(created_response(order))
}

/// List inbound orders
#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders",
    summary = "List inbound orders",
    description = "Return every inbound order. No ordering is guaranteed.",
    responses(
        (status = 200, description = "All inbound orders", body = [InboundOrder]),
        (status = 500, description = "Orders could not be loaded", body = ErrorResponse),
    ),
    tag = "inbound-orders"
)]
pub async fn list_inbound_orders(
    State(services): State<AppServices>,
) -> Result<Response, ApiError> {
    let orders = services.inbound_orders.get_all().await?;

    Ok(success_response(orders))
}

/// Creates the router for inbound order endpoints
pub fn inbound_order_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    AppServices: FromRef<S>,
{
    Router::new().route(
        "/inboundOrders",
        post(create_inbound_order).get(list_inbound_orders),
    )
}
