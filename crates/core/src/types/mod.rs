//! Domain types shared across the pipeline

mod record;
mod resolved;

pub use record::Record;
pub use resolved::ResolvedEnv;
