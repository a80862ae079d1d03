//! Detection and expansion of `ssm://` references

use crate::fetcher::ParameterFetcher;
use crate::parser::Entry;
use ssm2dotenv_core::{Error, Record, Result, ENV_PLACEHOLDER, SSM_SCHEME};

/// How a value from the input file is to be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    /// Emitted verbatim
    Literal(&'a str),
    /// Points at a parameter; `template` is the path after the scheme, before
    /// placeholder substitution
    Indirect { template: &'a str },
}

impl<'a> Reference<'a> {
    /// Classify a raw value by its prefix
    #[must_use]
    pub fn classify(value: &'a str) -> Self {
        match value.strip_prefix(SSM_SCHEME) {
            Some(template) => Reference::Indirect { template },
            None => Reference::Literal(value),
        }
    }
}

/// Turns entries into records, fetching indirect values on the way.
///
/// The environment token replaces every `${env}` in a reference path. An
/// empty token counts as no token.
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver {
    environment: Option<String>,
}

impl ReferenceResolver {
    #[must_use]
    pub fn new(environment: Option<String>) -> Self {
        Self {
            environment: environment.filter(|env| !env.is_empty()),
        }
    }

    #[must_use]
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// Build the name handed to the fetcher from a reference path.
    ///
    /// Without an environment token the placeholder is left in place and the
    /// store is asked for the literal name.
    #[must_use]
    pub fn lookup_name(&self, template: &str) -> String {
        match self.environment {
            Some(ref env) => template.replace(ENV_PLACEHOLDER, env),
            None => {
                if template.contains(ENV_PLACEHOLDER) {
                    tracing::warn!(
                        template = %template,
                        "Reference contains {} but no environment was given; looking it up literally",
                        ENV_PLACEHOLDER
                    );
                }
                template.to_string()
            }
        }
    }

    /// Resolve one parsed entry into a record
    pub async fn resolve(
        &self,
        entry: &Entry<'_>,
        fetcher: &dyn ParameterFetcher,
    ) -> Result<Record> {
        let template = match Reference::classify(entry.value) {
            Reference::Literal(value) => return Ok(Record::literal(entry.name, value)),
            Reference::Indirect { template } => template,
        };

        let lookup_name = self.lookup_name(template);
        if lookup_name.is_empty() {
            return Err(Error::resolution(
                entry.name,
                lookup_name,
                Error::configuration(format!(
                    "line {}: reference has an empty parameter name",
                    entry.line_number
                )),
            ));
        }

        tracing::debug!(name = %entry.name, lookup_name = %lookup_name, "Fetching parameter");

        match fetcher.fetch(&lookup_name).await {
            Ok(value) => Ok(Record::indirect(entry.name, entry.value, value)),
            Err(e) => Err(Error::resolution(entry.name, lookup_name, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::MemoryFetcher;

    fn entry<'a>(name: &'a str, value: &'a str) -> Entry<'a> {
        Entry {
            line_number: 1,
            name,
            value,
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Reference::classify("plain"), Reference::Literal("plain"));
        assert_eq!(
            Reference::classify("ssm://app/key"),
            Reference::Indirect {
                template: "app/key"
            }
        );
        // Prefix must be at the very start and is case sensitive
        for value in [" ssm://app/key", "SSM://app/key", "ssm:/app/key"] {
            assert_eq!(Reference::classify(value), Reference::Literal(value));
        }
    }

    #[test]
    fn test_lookup_name_substitutes_every_placeholder() {
        let resolver = ReferenceResolver::new(Some("prod".to_string()));
        assert_eq!(resolver.lookup_name("db/${env}/password"), "db/prod/password");
        assert_eq!(resolver.lookup_name("${env}/a/${env}"), "prod/a/prod");
        assert_eq!(resolver.lookup_name("static/name"), "static/name");
    }

    #[test]
    fn test_lookup_name_without_environment_keeps_placeholder() {
        let resolver = ReferenceResolver::new(None);
        assert_eq!(resolver.lookup_name("db/${env}/password"), "db/${env}/password");

        let empty = ReferenceResolver::new(Some(String::new()));
        assert_eq!(empty.environment(), None);
        assert_eq!(empty.lookup_name("db/${env}/password"), "db/${env}/password");
    }

    #[tokio::test]
    async fn test_literal_values_never_reach_the_fetcher() {
        let fetcher = MemoryFetcher::new();
        let resolver = ReferenceResolver::new(Some("prod".to_string()));

        let record = resolver
            .resolve(&entry("MODE", "release ${env}"), &fetcher)
            .await
            .unwrap();

        assert!(!record.is_indirect());
        assert_eq!(record.resolved_value(), "release ${env}");
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_indirect_value_is_fetched() {
        let fetcher = MemoryFetcher::new().with_parameter("db/prod/password", "hunter2");
        let resolver = ReferenceResolver::new(Some("prod".to_string()));

        let record = resolver
            .resolve(&entry("DB_PASSWORD", "ssm://db/${env}/password"), &fetcher)
            .await
            .unwrap();

        assert!(record.is_indirect());
        assert_eq!(record.resolved_value(), "hunter2");
        assert_eq!(record.original_value(), "ssm://db/${env}/password");
        assert_eq!(fetcher.calls(), vec!["db/prod/password".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_wrapped_with_record_name() {
        let fetcher = MemoryFetcher::failing();
        let resolver = ReferenceResolver::new(None);

        let err = resolver
            .resolve(&entry("API_KEY", "ssm://api/key"), &fetcher)
            .await
            .unwrap_err();

        match err {
            Error::Resolution {
                name, lookup_name, ..
            } => {
                assert_eq!(name, "API_KEY");
                assert_eq!(lookup_name, "api/key");
            }
            other => panic!("expected Resolution, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_reference_path_fails_without_fetching() {
        let fetcher = MemoryFetcher::new();
        let resolver = ReferenceResolver::new(None);

        let err = resolver
            .resolve(&entry("BROKEN", "ssm://"), &fetcher)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Resolution { ref name, .. } if name == "BROKEN"));
        assert!(fetcher.calls().is_empty());
    }
}
