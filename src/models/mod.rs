pub mod inbound_order;

pub use inbound_order::{InboundOrder, NewInboundOrder};
