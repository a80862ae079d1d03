//! Network-related utilities.
//!
//! - **`retry`**: exponential backoff retry for transient remote failures.

pub mod retry;

pub use retry::{retry_async, RetryConfig, RetryableError};
