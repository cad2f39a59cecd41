use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inbound Orders API",
        version = "1.0.0",
        description = r#"
# Inbound Orders API

Records warehouse inbound orders: incoming shipments linking an order date and
number to an employee, a product batch and a warehouse.

## Error Handling

Every failure returns a JSON object with a single `error` key:

```json
{ "error": "missing field `warehouse_id`" }
```

- `422` the create payload is malformed or a required field is missing, empty or zero
- `409` the store rejected the new order
- `500` orders could not be listed
        "#
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "inbound-orders", description = "Inbound order endpoints")
    ),
    paths(
        crate::handlers::inbound_orders::create_inbound_order,
        crate::handlers::inbound_orders::list_inbound_orders,
    ),
    components(
        schemas(
            crate::models::InboundOrder,
            crate::models::NewInboundOrder,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

/// Serves the generated document at `/api-docs/openapi.json`
pub fn openapi_routes() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDocV1::openapi()) }),
    )
}
