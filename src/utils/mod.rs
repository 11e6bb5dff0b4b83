pub mod code_generator;
pub mod phone;
pub mod validation;

pub use code_generator::{generate_order_id, generate_pin};
pub use phone::is_valid_contact_number;
pub use validation::{is_complete_address, is_non_empty_feedback};
