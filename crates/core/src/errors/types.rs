//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for ssm2dotenv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ssm2dotenv operations using thiserror
///
/// Every variant is terminal for a run: nothing is written once one of these
/// has been produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-empty line is not exactly one `NAME=VALUE` pair
    MalformedLine { line_number: usize, line: String },

    /// Fetching the value behind an `ssm://` reference failed
    Resolution {
        name: String,
        lookup_name: String,
        #[source]
        source: Box<Error>,
    },

    /// The resolved output could not be written
    OutputWrite {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The parameter store refused the request (not found, access denied)
    Service {
        parameter: String,
        code: Option<String>,
        message: String,
    },

    /// Transient remote store failures (throttling, connectivity)
    Network { endpoint: String, message: String },

    /// The remote store answered with something that is not a parameter value
    InvalidResponse { parameter: String, message: String },

    /// Configuration errors
    Configuration { message: String },

    /// Operation timeout errors
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },
}
