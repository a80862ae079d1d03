//! Error types for ssm2dotenv operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
