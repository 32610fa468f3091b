use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use secrecy::SecretString;
use serde::Deserialize;
use std::env;
use types::{MissingDepartment, Result, err};
use url::Url;

const DEFAULT_CONFIG_FILE: &str = "staffdesk.toml";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the HR REST API. Paths below are joined onto it.
    pub hr_api_url: Url,
    pub employees_path: String,
    pub token_path: String,
    pub profile_path: String,
    pub session_secret: SecretString,
    pub secure_cookies: bool,
    pub request_timeout_secs: u64,
    /// Follow `next` links of paginated employee listings.
    pub follow_next_pages: bool,
    pub max_pages: usize,
    pub missing_department: MissingDepartment,
}

impl Config {
    /// Load from `staffdesk.toml` (or the file named by `STAFFDESK_CONFIG`),
    /// overridden by `STAFFDESK_*` environment variables.
    pub fn load() -> Result<Self> {
        let path = env::var("STAFFDESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());

        let builder = defaults()
            .map_err(invalid)?
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("STAFFDESK").try_parsing(true));

        build(builder)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let builder = defaults()
            .map_err(invalid)?
            .add_source(File::from_str(source, FileFormat::Toml));

        build(builder)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("hr_api_url", "http://127.0.0.1:8000/")?
        .set_default("employees_path", "api/employees/")?
        .set_default("token_path", "api/token/")?
        .set_default("profile_path", "api/profile/")?
        .set_default("secure_cookies", false)?
        .set_default("request_timeout_secs", 10)?
        .set_default("follow_next_pages", false)?
        .set_default("max_pages", 20)?
        .set_default("missing_department", "bucket")
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config> {
    let config: Config = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(invalid)?;

    if config.max_pages == 0 {
        return Err(err!("invalid configuration: max_pages must be at least 1"));
    }

    Ok(config)
}

fn invalid(error: ConfigError) -> types::Error {
    err!("invalid configuration: {error}")
}
