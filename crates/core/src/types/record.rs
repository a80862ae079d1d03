//! A single resolved line of an env file

use std::fmt;

/// One logical entry of an env file after resolution.
///
/// Records are built once by the pipeline and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    resolved_value: String,
    original_value: String,
    is_indirect: bool,
}

impl Record {
    /// Create a record whose value is taken verbatim from the file
    #[must_use]
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            resolved_value: value.clone(),
            original_value: value,
            is_indirect: false,
        }
    }

    /// Create a record whose value was fetched from the parameter store
    #[must_use]
    pub fn indirect(
        name: impl Into<String>,
        original_value: impl Into<String>,
        resolved_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resolved_value: resolved_value.into(),
            original_value: original_value.into(),
            is_indirect: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value written to the output file
    #[must_use]
    pub fn resolved_value(&self) -> &str {
        &self.resolved_value
    }

    /// The right-hand side exactly as it appeared in the input
    #[must_use]
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    #[must_use]
    pub fn is_indirect(&self) -> bool {
        self.is_indirect
    }

    /// Render as a `NAME=VALUE` line without a trailing newline
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}={}", self.name, self.resolved_value)
    }
}

// Fetched values are secrets; keep them out of debug output and logs.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved: &dyn fmt::Debug = if self.is_indirect {
            &"<redacted>"
        } else {
            &self.resolved_value
        };
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("resolved_value", resolved)
            .field("original_value", &self.original_value)
            .field("is_indirect", &self.is_indirect)
            .finish()
    }
}
