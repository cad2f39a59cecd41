pub mod common;
pub mod inbound_orders;

use crate::repositories::SeaOrmInboundOrderRepository;
use crate::services::{InboundOrderService, InboundOrderServiceImpl};
use crate::AppState;
use axum::extract::FromRef;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub inbound_orders: Arc<dyn InboundOrderService>,
}

impl AppServices {
    /// Wire the relational implementations on top of a shared connection pool.
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        let repository = Arc::new(SeaOrmInboundOrderRepository::new(db_pool));
        let inbound_orders = Arc::new(InboundOrderServiceImpl::new(repository));

        Self { inbound_orders }
    }

    /// Build a container around an already constructed service.
    pub fn with_inbound_orders(inbound_orders: Arc<dyn InboundOrderService>) -> Self {
        Self { inbound_orders }
    }
}

impl FromRef<AppState> for AppServices {
    fn from_ref(state: &AppState) -> Self {
        state.services.clone()
    }
}
