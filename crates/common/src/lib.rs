pub mod types;
pub mod utils;
