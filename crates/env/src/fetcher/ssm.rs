//! AWS Systems Manager Parameter Store fetcher backed by the AWS SDK

use super::ParameterFetcher;
use async_trait::async_trait;
use aws_config::retry::RetryConfig as SdkRetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameter::{GetParameterError, GetParameterOutput};
use aws_sdk_ssm::Client;
use ssm2dotenv_core::{Error, Result, DEFAULT_FETCH_ATTEMPTS, DEFAULT_FETCH_TIMEOUT_SECS};
use ssm2dotenv_utils::{retry_async, RetryConfig};
use std::time::Duration;
use tokio::sync::OnceCell;

/// Service error codes for failures worth retrying
const TRANSIENT_CODES: &[&str] = &[
    "ThrottlingException",
    "Throttling",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "InternalServerError",
    "ServiceUnavailable",
];

/// Settings for the Parameter Store client
#[derive(Debug, Clone)]
pub struct SsmConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Replaces the regional service endpoint, e.g. for a local emulator
    pub endpoint_url: Option<String>,
    /// Attempts per parameter, including the first
    pub max_attempts: u32,
    /// Upper bound for a single attempt
    pub timeout: Duration,
}

impl Default for SsmConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            max_attempts: DEFAULT_FETCH_ATTEMPTS,
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

/// One `GetParameter` call with decryption, no retry and no timeout
#[async_trait]
trait GetParameter: Send + Sync {
    async fn get_parameter(&self, name: &str) -> Result<String>;
}

/// SDK-backed source. The client is built on first use, so a file without
/// references never loads AWS configuration or credentials.
struct SdkParameterSource {
    config: SsmConfig,
    client: OnceCell<Client>,
}

impl SdkParameterSource {
    async fn client(&self) -> &Client {
        self.client.get_or_init(|| load_client(&self.config)).await
    }
}

async fn load_client(config: &SsmConfig) -> Client {
    // Retries are driven by `retry_async` so every attempt gets its own timeout
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(SdkRetryConfig::disabled());
    if let Some(ref region) = config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(ref profile) = config.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(ref endpoint) = config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    tracing::debug!(
        region = ?config.region,
        profile = ?config.profile,
        endpoint = ?config.endpoint_url,
        "Loading AWS configuration"
    );
    Client::new(&loader.load().await)
}

#[async_trait]
impl GetParameter for SdkParameterSource {
    async fn get_parameter(&self, name: &str) -> Result<String> {
        let output = self
            .client()
            .await
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| classify_sdk_error(name, e))?;

        parameter_value(name, &output)
    }
}

fn parameter_value(name: &str, output: &GetParameterOutput) -> Result<String> {
    output
        .parameter()
        .and_then(|parameter| parameter.value())
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_response(name, "response carries no parameter value"))
}

fn classify_sdk_error(name: &str, err: SdkError<GetParameterError>) -> Error {
    let message = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::ServiceError(ref context) => {
            classify_service_code(name, context.err().code(), message)
        }
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            Error::network("ssm", message)
        }
        _ => Error::configuration(message),
    }
}

fn classify_service_code(name: &str, code: Option<&str>, message: String) -> Error {
    match code {
        Some(code) if TRANSIENT_CODES.contains(&code) => Error::network("ssm", message),
        code => Error::service(name, code, message),
    }
}

/// Fetches decrypted parameter values with `GetParameter`.
///
/// Credentials and region follow the SDK's default provider chain unless
/// overridden in [`SsmConfig`]. Throttling, connectivity failures and slow
/// attempts are retried with backoff; everything else fails at once.
pub struct SsmFetcher {
    source: Box<dyn GetParameter>,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl SsmFetcher {
    pub fn new(config: SsmConfig) -> Self {
        let timeout = config.timeout;
        let retry_config = RetryConfig::network(config.max_attempts);
        let source = SdkParameterSource {
            config,
            client: OnceCell::new(),
        };
        Self::with_source(Box::new(source), timeout, retry_config)
    }

    fn with_source(
        source: Box<dyn GetParameter>,
        timeout: Duration,
        retry_config: RetryConfig,
    ) -> Self {
        Self {
            source,
            timeout,
            retry_config,
        }
    }

    async fn fetch_once(&self, name: &str) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.source.get_parameter(name)).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout(format!("GetParameter {name}"), self.timeout)),
        }
    }
}

#[async_trait]
impl ParameterFetcher for SsmFetcher {
    async fn fetch(&self, name: &str) -> Result<String> {
        retry_async(self.retry_config.clone(), || self.fetch_once(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::types::Parameter;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Replays scripted answers and records every requested name
    struct ScriptedSource {
        answers: Mutex<VecDeque<Result<String>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(answers: Vec<Result<String>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GetParameter for std::sync::Arc<ScriptedSource> {
        async fn get_parameter(&self, name: &str) -> Result<String> {
            self.calls.lock().push(name.to_string());
            self.answers
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(Error::configuration("no scripted answer left")))
        }
    }

    fn no_wait(max_attempts: u32) -> RetryConfig {
        RetryConfig {
            max_attempts,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1),
            multiplier: 1.0,
            jitter: false,
        }
    }

    fn scripted(
        answers: Vec<Result<String>>,
        max_attempts: u32,
    ) -> (SsmFetcher, std::sync::Arc<ScriptedSource>) {
        let source = std::sync::Arc::new(ScriptedSource::new(answers));
        let fetcher = SsmFetcher::with_source(
            Box::new(source.clone()),
            Duration::from_secs(30),
            no_wait(max_attempts),
        );
        (fetcher, source)
    }

    fn throttled() -> Error {
        classify_service_code("app/key", Some("ThrottlingException"), "Rate exceeded".into())
    }

    #[tokio::test]
    async fn test_fetch_returns_parameter_value() {
        let (fetcher, source) = scripted(vec![Ok("hunter2".to_string())], 3);
        assert_eq!(fetcher.fetch("db/prod/password").await.unwrap(), "hunter2");
        assert_eq!(*source.calls.lock(), vec!["db/prod/password".to_string()]);
    }

    #[tokio::test]
    async fn test_lookup_name_reaches_the_store_verbatim() {
        // Names that look like local paths or URLs are still just names
        for name in ["file:///etc/hostname", "https://example.com/x", "a b/${env}"] {
            let (fetcher, source) = scripted(vec![Ok("v".to_string())], 1);
            fetcher.fetch(name).await.unwrap();
            assert_eq!(*source.calls.lock(), vec![name.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_not_found_fails_without_retry() {
        let not_found =
            classify_service_code("missing", Some("ParameterNotFound"), "not found".into());
        let (fetcher, source) = scripted(vec![Err(not_found)], 5);

        let err = fetcher.fetch("missing").await.unwrap_err();
        assert!(
            matches!(err, Error::Service { ref code, .. } if code.as_deref() == Some("ParameterNotFound"))
        );
        assert_eq!(source.calls.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_throttling_is_retried() {
        let (fetcher, source) = scripted(
            vec![Err(throttled()), Err(throttled()), Ok("eventually".to_string())],
            3,
        );

        assert_eq!(fetcher.fetch("app/key").await.unwrap(), "eventually");
        assert_eq!(source.calls.lock().len(), 3);
    }

    #[tokio::test]
    async fn test_throttling_gives_up_after_max_attempts() {
        let (fetcher, source) = scripted((0..10).map(|_| Err(throttled())).collect(), 2);

        let err = fetcher.fetch("app/key").await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
        assert_eq!(source.calls.lock().len(), 2);
    }

    struct HangingSource;

    #[async_trait]
    impl GetParameter for HangingSource {
        async fn get_parameter(&self, _name: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(Error::configuration("unreachable"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_store_times_out() {
        let fetcher =
            SsmFetcher::with_source(Box::new(HangingSource), Duration::from_secs(5), no_wait(1));

        let err = fetcher.fetch("app/key").await.unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }

    #[test]
    fn test_classify_service_code() {
        for code in ["ThrottlingException", "InternalServerError"] {
            let err = classify_service_code("app/key", Some(code), "busy".into());
            assert!(matches!(err, Error::Network { .. }), "{code} should be transient");
        }

        let denied = classify_service_code("app/key", Some("AccessDeniedException"), "no".into());
        assert!(matches!(denied, Error::Service { ref parameter, .. } if parameter == "app/key"));

        let unknown = classify_service_code("app/key", None, "unhandled".into());
        assert!(matches!(unknown, Error::Service { code: None, .. }));
    }

    #[test]
    fn test_sdk_timeout_is_transient() {
        let err = classify_sdk_error("app/key", SdkError::timeout_error("read timed out"));
        assert!(matches!(err, Error::Network { .. }));
    }

    #[test]
    fn test_parameter_value_from_response() {
        let output = GetParameterOutput::builder()
            .parameter(Parameter::builder().name("app/key").value("v").build())
            .build();
        assert_eq!(parameter_value("app/key", &output).unwrap(), "v");

        let empty = GetParameterOutput::builder().build();
        let err = parameter_value("app/key", &empty).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { ref parameter, .. } if parameter == "app/key"));
    }
}
