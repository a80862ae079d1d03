/// Constants used throughout the ssm2dotenv codebase
// Reference syntax
pub const SSM_SCHEME: &str = "ssm://";
pub const ENV_PLACEHOLDER: &str = "${env}";

// Line format
pub const FIELD_DELIMITER: char = '=';
pub const LINE_SEPARATOR: &str = "\n";

// Output file mode (rw-r--r--)
pub const OUTPUT_FILE_MODE: u32 = 0o644;

// Environment variable names
pub const SSM2DOTENV_ENV_VAR: &str = "SSM2DOTENV_ENV";
pub const SSM2DOTENV_ENDPOINT_URL_VAR: &str = "SSM2DOTENV_ENDPOINT_URL";
pub const SSM2DOTENV_RETRIES_VAR: &str = "SSM2DOTENV_RETRIES";
pub const SSM2DOTENV_TIMEOUT_VAR: &str = "SSM2DOTENV_TIMEOUT";

// AWS client defaults
pub const DEFAULT_FETCH_ATTEMPTS: u32 = 3;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
