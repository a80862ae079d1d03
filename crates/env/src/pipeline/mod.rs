//! End-to-end resolution of an env file
//!
//! The pipeline is linear: parse everything, then resolve entries one after
//! another. The first error ends the run and no partial result is returned.

use crate::fetcher::ParameterFetcher;
use crate::parser;
use crate::reference::ReferenceResolver;
use ssm2dotenv_core::{ResolvedEnv, Result};
use std::sync::Arc;


/// Resolves env file content against a parameter store
pub struct Pipeline {
    fetcher: Arc<dyn ParameterFetcher>,
    resolver: ReferenceResolver,
}

impl Pipeline {
    /// Create a pipeline around an injected fetcher
    ///
    /// # Arguments
    /// * `fetcher` - Store used for every `ssm://` reference
    /// * `environment` - Token substituted for `${env}`; `None` or empty leaves
    ///   placeholders as they are
    pub fn new(fetcher: Arc<dyn ParameterFetcher>, environment: Option<String>) -> Self {
        Self {
            fetcher,
            resolver: ReferenceResolver::new(environment),
        }
    }

    /// Resolve every entry of `content`
    pub async fn resolve(&self, content: &str) -> Result<ResolvedEnv> {
        let entries = parser::parse(content)?;
        tracing::info!(
            entries = entries.len(),
            environment = ?self.resolver.environment(),
            "Resolving env file"
        );

        let mut resolved = ResolvedEnv::new();
        for entry in &entries {
            let record = self.resolver.resolve(entry, self.fetcher.as_ref()).await?;
            resolved.insert(record);
        }

        tracing::info!(
            records = resolved.len(),
            fetched = resolved.indirect_count(),
            "Env file resolved"
        );
        Ok(resolved)
    }

    /// Resolve raw file bytes; invalid UTF-8 sequences become U+FFFD
    pub async fn resolve_bytes(&self, content: &[u8]) -> Result<ResolvedEnv> {
        self.resolve(&String::from_utf8_lossy(content)).await
    }

    /// Resolve and serialize back to `NAME=VALUE` lines
    pub async fn render(&self, content: &[u8]) -> Result<String> {
        Ok(self.resolve_bytes(content).await?.to_dotenv())
    }
}
