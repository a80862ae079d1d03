//! File in, file out: the I/O around the resolution pipeline

use crate::cli::Settings;
use ssm2dotenv_core::{Error, Result, OUTPUT_FILE_MODE};
use ssm2dotenv_env::{ParameterFetcher, Pipeline};
use ssm2dotenv_utils::write_atomic_string;
use std::sync::Arc;

/// Summary of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub records: usize,
    pub fetched: usize,
}

/// Read the input, resolve it, and write the output.
///
/// The output file is only touched once every record has resolved.
pub async fn execute(settings: &Settings, fetcher: Arc<dyn ParameterFetcher>) -> Result<RunReport> {
    let content = tokio::fs::read(&settings.input)
        .await
        .map_err(|e| Error::input_read(&settings.input, e))?;

    let pipeline = Pipeline::new(fetcher, settings.environment.clone());
    let resolved = pipeline.resolve_bytes(&content).await?;

    write_atomic_string(&settings.output, &resolved.to_dotenv(), OUTPUT_FILE_MODE)?;
    tracing::info!(path = %settings.output.display(), "Wrote output file");

    Ok(RunReport {
        records: resolved.len(),
        fetched: resolved.indirect_count(),
    })
}
