//! Env file resolution for ssm2dotenv
//!
//! This crate turns the text of a `KEY=VALUE` file into a [`ResolvedEnv`]:
//! lines are parsed, `ssm://` references are expanded and fetched through a
//! [`ParameterFetcher`], and literal values pass through untouched.
//!
//! [`ResolvedEnv`]: ssm2dotenv_core::ResolvedEnv

pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod reference;

pub use fetcher::{MemoryFetcher, ParameterFetcher, SsmConfig, SsmFetcher};
pub use parser::{parse, Entry};
pub use pipeline::Pipeline;
pub use reference::{Reference, ReferenceResolver};
