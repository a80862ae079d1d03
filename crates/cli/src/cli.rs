use clap::{ArgAction, Parser};
use ssm2dotenv_core::{
    DEFAULT_FETCH_ATTEMPTS, DEFAULT_FETCH_TIMEOUT_SECS, SSM2DOTENV_ENDPOINT_URL_VAR,
    SSM2DOTENV_ENV_VAR, SSM2DOTENV_RETRIES_VAR, SSM2DOTENV_TIMEOUT_VAR,
};
use ssm2dotenv_env::SsmConfig;
use ssm2dotenv_utils::Level;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ssm2dotenv")]
#[command(
    about = "Inject SSM parameters into a .env file",
    long_about = "Reads a KEY=VALUE file, replaces every value of the form ssm://<path> with \
                  the decrypted value of that parameter, and writes the result. <path> may \
                  contain ${env}, which is replaced with the value of --env."
)]
#[command(version, disable_version_flag = true)]
#[command(override_usage = "ssm2dotenv --input <INPUT> --output <OUTPUT> [--env <ENV>]")]
pub struct Cli {
    /// Input file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Value substituted for ${env} in parameter paths
    #[arg(short = 'e', long = "env", env = SSM2DOTENV_ENV_VAR)]
    pub environment: Option<String>,

    /// AWS region for parameter lookups
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS credentials profile
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Parameter Store endpoint URL, replacing the regional default
    #[arg(long, env = SSM2DOTENV_ENDPOINT_URL_VAR)]
    pub endpoint_url: Option<String>,

    /// Attempts per parameter before giving up on transient failures
    #[arg(
        long,
        env = SSM2DOTENV_RETRIES_VAR,
        default_value_t = DEFAULT_FETCH_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub retries: u32,

    /// Timeout in seconds for a single parameter lookup
    #[arg(
        long,
        env = SSM2DOTENV_TIMEOUT_VAR,
        default_value_t = DEFAULT_FETCH_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: Level,

    /// Print only the version
    #[arg(short = 'v', long = "print-version", visible_alias = "version", action = ArgAction::Version)]
    pub print_version: Option<bool>,
}

/// Everything a run needs, taken from flags and environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub environment: Option<String>,
    pub ssm: SsmConfig,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            environment: cli.environment.filter(|env| !env.is_empty()),
            ssm: SsmConfig {
                region: cli.region.filter(|r| !r.is_empty()),
                profile: cli.profile.filter(|p| !p.is_empty()),
                endpoint_url: cli.endpoint_url.filter(|u| !u.is_empty()),
                max_attempts: cli.retries,
                timeout: Duration::from_secs(cli.timeout),
            },
        }
    }
}
