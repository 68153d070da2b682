use dotenvy::dotenv;
use std::env;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Url::parse(&api_base_url)?;

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_base_url,
            request_timeout_secs,
        })
    }

    /// Config for a known backend, used by tests and embedders that already
    /// resolved their endpoint.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
