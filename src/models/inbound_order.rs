use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A warehouse inbound order: an incoming shipment tying an order date and
/// number to the employee, product batch and warehouse involved.
///
/// `id` is zero until the record has been persisted; afterwards it holds the
/// store-assigned identifier and never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InboundOrder {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "2022-07-10")]
    pub order_date: String,
    #[schema(example = "ORD-001")]
    pub order_number: String,
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = 2)]
    pub product_batch_id: i64,
    #[schema(example = 3)]
    pub warehouse_id: i64,
}

/// Creation payload. Every field is required: strings must be non-empty and
/// identifiers non-zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewInboundOrder {
    #[validate(length(min = 1, message = "order_date is required"))]
    #[schema(example = "2022-07-10")]
    pub order_date: String,
    #[validate(length(min = 1, message = "order_number is required"))]
    #[schema(example = "ORD-001")]
    pub order_number: String,
    #[validate(custom = "validate_required_id")]
    #[schema(example = 1)]
    pub employee_id: i64,
    #[validate(custom = "validate_required_id")]
    #[schema(example = 2)]
    pub product_batch_id: i64,
    #[validate(custom = "validate_required_id")]
    #[schema(example = 3)]
    pub warehouse_id: i64,
}

impl From<NewInboundOrder> for InboundOrder {
    fn from(new: NewInboundOrder) -> Self {
        Self {
            id: 0,
            order_date: new.order_date,
            order_number: new.order_number,
            employee_id: new.employee_id,
            product_batch_id: new.product_batch_id,
            warehouse_id: new.warehouse_id,
        }
    }
}

// validator hands numeric fields to custom functions by value
fn validate_required_id(value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        let mut err = ValidationError::new("required");
        err.message = Some("must be a non-zero identifier".into());
        return Err(err);
    }
    Ok(())
}
