use super::ParameterFetcher;
use async_trait::async_trait;
use parking_lot::Mutex;
use ssm2dotenv_core::{Error, Result};
use std::collections::HashMap;

/// In-memory parameter store.
///
/// Every lookup is recorded, so callers can assert on exactly which names were
/// requested and how often.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    parameters: HashMap<String, String>,
    unavailable: bool,
    calls: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every lookup as if it were unreachable
    #[must_use]
    pub fn failing() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Names requested so far, in request order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ParameterFetcher for MemoryFetcher {
    async fn fetch(&self, name: &str) -> Result<String> {
        self.calls.lock().push(name.to_string());

        if self.unavailable {
            return Err(Error::network("memory", "parameter store unavailable"));
        }

        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| Error::service(name, Some("ParameterNotFound"), "parameter not found"))
    }
}
