//! Core domain types, errors, and constants for `ssm2dotenv`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate in
//!   the workspace. Each failure of a run maps to exactly one variant.
//! - **`types`**: `Record` (one resolved line of an env file) and `ResolvedEnv`
//!   (the name-keyed mapping handed to serialization).
//! - **`constants`**: reference scheme, placeholder token and output defaults.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
