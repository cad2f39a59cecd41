pub mod inbound_order;
