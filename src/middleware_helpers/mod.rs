pub mod request_id;
pub mod timeout;

pub use request_id::request_id_middleware;
pub use timeout::request_timeout_middleware;
