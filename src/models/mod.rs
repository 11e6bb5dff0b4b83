pub mod events;
pub mod response;
pub mod tracker;

pub use events::*;
pub use response::*;
pub use tracker::*;
