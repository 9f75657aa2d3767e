pub mod generate;
pub mod list;

pub use generate::{GenerateConfig, generate_requests};
pub use list::list_operations;
