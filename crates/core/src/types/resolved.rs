//! The name-keyed result of a pipeline run

use super::Record;
use crate::constants::LINE_SEPARATOR;
use indexmap::IndexMap;
use std::fmt;

/// Fully resolved env file, keyed by record name.
///
/// Inserting a name that is already present replaces the earlier record
/// (last write wins) while keeping the slot of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEnv {
    records: IndexMap<String, Record>,
}

impl ResolvedEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced if any
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        let previous = self.records.insert(record.name().to_string(), record);
        if let Some(ref replaced) = previous {
            tracing::debug!(name = %replaced.name(), "Duplicate name, keeping last value");
        }
        previous
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose value came from the parameter store
    #[must_use]
    pub fn indirect_count(&self) -> usize {
        self.records.values().filter(|r| r.is_indirect()).count()
    }

    /// Serialize as `NAME=VALUE` lines joined by `\n`, no trailing newline
    #[must_use]
    pub fn to_dotenv(&self) -> String {
        self.records
            .values()
            .map(Record::to_line)
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }
}

impl fmt::Display for ResolvedEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotenv())
    }
}
