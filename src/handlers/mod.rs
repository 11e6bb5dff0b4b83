pub mod health;
pub mod webhook;

pub use health::health_config;
pub use webhook::webhook_config;
