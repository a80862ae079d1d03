use clap::Parser;
use eyre::WrapErr;
use ssm2dotenv_env::SsmFetcher;
use std::process::ExitCode;
use std::sync::Arc;

mod cli;
mod run;

use cli::{Cli, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = ssm2dotenv_utils::init_logging(cli.log_level) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match try_main(Settings::from(cli)).await {
        Ok(()) => {
            println!("finish.");
            ExitCode::SUCCESS
        }
        Err(report) => {
            eprintln!("fail: {report:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(settings: Settings) -> eyre::Result<()> {
    let fetcher = Arc::new(SsmFetcher::new(settings.ssm.clone()));
    let report = run::execute(&settings, fetcher)
        .await
        .wrap_err_with(|| {
            format!(
                "could not generate '{}' from '{}'",
                settings.output.display(),
                settings.input.display()
            )
        })?;

    tracing::debug!(
        records = report.records,
        fetched = report.fetched,
        "Run complete"
    );
    Ok(())
}
