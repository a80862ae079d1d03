//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputRead { path, source } => {
                write!(
                    f,
                    "failed to read input file '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::MalformedLine { line_number, line } => {
                write!(f, "invalid line {line_number}: {line}")
            }
            Error::Resolution {
                name, lookup_name, ..
            } => {
                // The cause is reachable through `source()`; callers print the chain.
                write!(f, "{name}: failed to fetch parameter '{lookup_name}'")
            }
            Error::OutputWrite {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "failed to {} output file '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Service {
                parameter,
                code,
                message,
            } => match code {
                Some(code) => write!(
                    f,
                    "parameter store rejected '{parameter}' ({code}): {message}"
                ),
                None => write!(f, "parameter store rejected '{parameter}': {message}"),
            },
            Error::Network { endpoint, message } => {
                write!(f, "network error for '{endpoint}': {message}")
            }
            Error::InvalidResponse { parameter, message } => {
                write!(f, "invalid response for parameter '{parameter}': {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Timeout {
                operation,
                duration,
            } => {
                write!(f, "operation '{operation}' timed out after {duration:?}")
            }
        }
    }
}
