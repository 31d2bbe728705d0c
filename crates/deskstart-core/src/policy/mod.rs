pub mod operations;
pub mod types;

pub use operations::decide;
pub use types::PolicyConfig;
