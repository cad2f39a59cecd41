use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

use crate::models::InboundOrder;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inbound_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_date: String,
    pub order_number: String,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InboundOrder {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            order_date: model.order_date,
            order_number: model.order_number,
            employee_id: model.employee_id,
            product_batch_id: model.product_batch_id,
            warehouse_id: model.warehouse_id,
        }
    }
}

impl From<&InboundOrder> for ActiveModel {
    /// Builds an insertable row; the id is always left to the store.
    fn from(order: &InboundOrder) -> Self {
        Self {
            id: NotSet,
            order_date: Set(order.order_date.clone()),
            order_number: Set(order.order_number.clone()),
            employee_id: Set(order.employee_id),
            product_batch_id: Set(order.product_batch_id),
            warehouse_id: Set(order.warehouse_id),
        }
    }
}
