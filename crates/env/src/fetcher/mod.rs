//! Parameter store access
//!
//! The pipeline only ever talks to the store through [`ParameterFetcher`].
//! [`SsmFetcher`] backs it with AWS Systems Manager Parameter Store through
//! the AWS SDK; [`MemoryFetcher`] is an in-memory stand-in for tests.

mod memory;
mod ssm;

pub use memory::MemoryFetcher;
pub use ssm::{SsmConfig, SsmFetcher};

use async_trait::async_trait;
use ssm2dotenv_core::Result;

/// Fetches the decrypted current value of a parameter by name
#[async_trait]
pub trait ParameterFetcher: Send + Sync {
    /// Fetch a parameter value
    ///
    /// # Arguments
    /// * `name` - Fully resolved parameter name: no scheme prefix, placeholders
    ///   already substituted
    ///
    /// # Returns
    /// * `Ok(value)` - Decrypted plaintext value
    /// * `Err(error)` - Not found, access denied, or any store failure
    async fn fetch(&self, name: &str) -> Result<String>;
}
