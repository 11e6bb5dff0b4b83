pub mod customers;
pub mod feedback;
pub mod orders;

pub use customers as customer_entity;
pub use feedback as feedback_entity;
pub use orders as order_entity;

pub use orders::OrderStatus;
