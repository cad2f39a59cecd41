// Inbound order management
pub mod inbound_orders;

pub use inbound_orders::{InboundOrderService, InboundOrderServiceImpl};
