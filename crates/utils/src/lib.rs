//! Shared utilities for ssm2dotenv
//!
//! Small building blocks used by the pipeline and the binary: atomic file
//! output, retry with exponential backoff, and log subscriber setup.

pub mod atomic_file;
pub mod logging;
pub mod network;

pub use atomic_file::*;
pub use logging::*;
pub use network::*;
