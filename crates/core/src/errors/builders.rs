//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create an input read error
    #[must_use]
    pub fn input_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed line error; `line_number` is 1-based
    #[must_use]
    pub fn malformed_line(line_number: usize, line: impl Into<String>) -> Self {
        Error::MalformedLine {
            line_number,
            line: line.into(),
        }
    }

    /// Wrap a fetch failure with the record it was resolving
    #[must_use]
    pub fn resolution(
        name: impl Into<String>,
        lookup_name: impl Into<String>,
        source: Error,
    ) -> Self {
        Error::Resolution {
            name: name.into(),
            lookup_name: lookup_name.into(),
            source: Box::new(source),
        }
    }

    /// Create an output write error
    #[must_use]
    pub fn output_write(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::OutputWrite {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a parameter store service error
    #[must_use]
    pub fn service(
        parameter: impl Into<String>,
        code: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Error::Service {
            parameter: parameter.into(),
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create an invalid response error
    #[must_use]
    pub fn invalid_response(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidResponse {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a timeout error
    #[must_use]
    pub fn timeout(operation: impl Into<String>, duration: std::time::Duration) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration,
        }
    }
}
