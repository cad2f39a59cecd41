use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::entities::inbound_order::{ActiveModel as InboundOrderActiveModel, Entity as InboundOrderEntity};
use crate::errors::ServiceError;
use crate::models::InboundOrder;
use crate::repositories::Repository;

use super::BaseRepository;

/// Storage for inbound orders.
///
/// Implementations own the translation between [`InboundOrder`] and whatever
/// the backing store holds. Failures are reported as
/// [`ServiceError::DatabaseError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InboundOrderRepository: Send + Sync {
    /// Persists `order` (its `id` is ignored) and returns it with the
    /// store-assigned id.
    async fn create(&self, order: InboundOrder) -> Result<InboundOrder, ServiceError>;

    /// Every stored order, in whatever order the store returns them.
    async fn get_all(&self) -> Result<Vec<InboundOrder>, ServiceError>;
}

/// Relational implementation backed by the `inbound_orders` table
#[derive(Debug, Clone)]
pub struct SeaOrmInboundOrderRepository {
    base: BaseRepository,
}

impl SeaOrmInboundOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl InboundOrderRepository for SeaOrmInboundOrderRepository {
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    async fn create(&self, mut order: InboundOrder) -> Result<InboundOrder, ServiceError> {
        let row: InboundOrderActiveModel = (&order).into();

        // Single statement: the id comes back with the insert result
        let result = InboundOrderEntity::insert(row)
            .exec(self.base.get_db())
            .await
            .map_err(|e| {
                error!(error = %e, "failed to insert inbound order");
                ServiceError::DatabaseError(e)
            })?;

        order.id = result.last_insert_id;
        debug!(id = order.id, "inbound order inserted");

        Ok(order)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<InboundOrder>, ServiceError> {
        let rows = InboundOrderEntity::find()
            .all(self.base.get_db())
            .await
            .map_err(|e| {
                error!(error = %e, "failed to load inbound orders");
                ServiceError::DatabaseError(e)
            })?;

        debug!(count = rows.len(), "inbound orders loaded");
        Ok(rows.into_iter().map(InboundOrder::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::inbound_order::Model;
    use assert_matches::assert_matches;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn new_order() -> InboundOrder {
        InboundOrder {
            id: 0,
            order_date: "2022-07-10".into(),
            order_number: "ORD-001".into(),
            employee_id: 1,
            product_batch_id: 2,
            warehouse_id: 3,
        }
    }

    fn row(id: i64, order_number: &str) -> Model {
        Model {
            id,
            order_date: "2022-07-10".into(),
            order_number: order_number.into(),
            employee_id: 1,
            product_batch_id: 2,
            warehouse_id: 3,
        }
    }

    fn repository(db: DatabaseConnection) -> SeaOrmInboundOrderRepository {
        SeaOrmInboundOrderRepository::new(Arc::new(db))
    }

    #[tokio::test]
    async fn create_sets_store_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 7,
                rows_affected: 1,
            }])
            .into_connection();

        let created = repository(db).create(new_order()).await.unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created, InboundOrder { id: 7, ..new_order() });
    }

    #[tokio::test]
    async fn create_binds_fields_in_column_order() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::MySql)
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let repo = SeaOrmInboundOrderRepository::new(db.clone());

        repo.create(new_order()).await.unwrap();
        drop(repo);

        let log = Arc::try_unwrap(db)
            .expect("repository released the connection")
            .into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        let positions: Vec<usize> = [
            "order_date",
            "order_number",
            "employee_id",
            "product_batch_id",
            "warehouse_id",
        ]
        .iter()
        .map(|column| sql.find(column).expect("column present in insert"))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!sql.contains("`id`,"));
    }

    #[tokio::test]
    async fn create_propagates_insert_failure() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_errors(vec![DbErr::Custom("duplicate entry".into())])
            .into_connection();

        let result = repository(db).create(new_order()).await;

        assert_matches!(result, Err(ServiceError::DatabaseError(DbErr::Custom(msg))) if msg == "duplicate entry");
    }

    #[tokio::test]
    async fn get_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results(vec![vec![row(1, "ORD-001"), row(2, "ORD-002")]])
            .into_connection();

        let orders = repository(db).get_all().await.unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 1);
        assert_eq!(orders[1].order_number, "ORD-002");
    }

    #[tokio::test]
    async fn get_all_on_empty_table_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let orders = repository(db).get_all().await.unwrap();

        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn get_all_propagates_query_failure() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_errors(vec![DbErr::Custom("connection reset".into())])
            .into_connection();

        let result = repository(db).get_all().await;

        assert_matches!(result, Err(ServiceError::DatabaseError(_)));
    }
}
