pub mod customer_service;
pub mod feedback_service;
pub mod order_service;

pub use customer_service::*;
pub use feedback_service::*;
pub use order_service::*;
