use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::{errors::ServiceError, models::InboundOrder, repositories::InboundOrderRepository};

/// Application-facing operations on inbound orders.
///
/// Handlers depend on this trait rather than on a storage technology.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InboundOrderService: Send + Sync {
    async fn create(&self, order: InboundOrder) -> Result<InboundOrder, ServiceError>;

    async fn get_all(&self) -> Result<Vec<InboundOrder>, ServiceError>;
}

/// Service for managing inbound orders
#[derive(Clone)]
pub struct InboundOrderServiceImpl {
    repository: Arc<dyn InboundOrderRepository>,
}

impl InboundOrderServiceImpl {
    /// Creates a new inbound order service instance
    pub fn new(repository: Arc<dyn InboundOrderRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl InboundOrderService for InboundOrderServiceImpl {
    /// Records a new inbound order
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    async fn create(&self, order: InboundOrder) -> Result<InboundOrder, ServiceError> {
        self.repository.create(order).await
    }

    /// Lists every inbound order
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<InboundOrder>, ServiceError> {
        self.repository.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::inbound_order_repository::MockInboundOrderRepository;
    use assert_matches::assert_matches;
    use mockall::predicate::eq;

    fn order(id: i64) -> InboundOrder {
        InboundOrder {
            id,
            order_date: "2022-07-10".into(),
            order_number: "ORD-001".into(),
            employee_id: 1,
            product_batch_id: 2,
            warehouse_id: 3,
        }
    }

    #[tokio::test]
    async fn create_forwards_to_repository_unchanged() {
        let mut repository = MockInboundOrderRepository::new();
        repository
            .expect_create()
            .with(eq(order(0)))
            .times(1)
            .returning(|mut o| {
                o.id = 42;
                Ok(o)
            });

        let service = InboundOrderServiceImpl::new(Arc::new(repository));
        let created = service.create(order(0)).await.unwrap();

        assert_eq!(created, order(42));
    }

    #[tokio::test]
    async fn create_forwards_repository_error() {
        let mut repository = MockInboundOrderRepository::new();
        repository
            .expect_create()
            .returning(|_| Err(ServiceError::database_error_message("constraint failed")));

        let service = InboundOrderServiceImpl::new(Arc::new(repository));

        assert_matches!(
            service.create(order(0)).await,
            Err(ServiceError::DatabaseError(_))
        );
    }

    #[tokio::test]
    async fn get_all_forwards_repository_result() {
        let mut repository = MockInboundOrderRepository::new();
        repository
            .expect_get_all()
            .times(1)
            .returning(|| Ok(vec![order(1), order(2)]));

        let service = InboundOrderServiceImpl::new(Arc::new(repository));
        let orders = service.get_all().await.unwrap();

        assert_eq!(orders, vec![order(1), order(2)]);
    }

    #[tokio::test]
    async fn get_all_forwards_repository_error() {
        let mut repository = MockInboundOrderRepository::new();
        repository
            .expect_get_all()
            .returning(|| Err(ServiceError::database_error_message("no such table")));

        let service = InboundOrderServiceImpl::new(Arc::new(repository));

        assert_matches!(service.get_all().await, Err(ServiceError::DatabaseError(_)));
    }
}
