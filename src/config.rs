use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-16k";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY environment variable not set".to_string()))?;

        Self::from_env_with_key(openai_api_key)
    }

    /// Reads everything except the credential, which the caller resolved some other way.
    pub fn from_env_with_key(openai_api_key: String) -> Result<Self> {
        if openai_api_key.trim().is_empty() {
            return Err(Error::Config("OpenAI API key is empty".to_string()));
        }

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature = match env::var("OPENAI_TEMPERATURE") {
            Ok(raw) => parse_temperature(&raw)?,
            Err(_) => DEFAULT_TEMPERATURE,
        };

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let max_retries = env::var("MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(4);

        let config = Self {
            openai_api_key,
            openai_base_url,
            model,
            temperature,
            request_timeout_secs,
            max_retries,
            concurrency_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks values that can also arrive through command-line overrides.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.concurrency_limit == 0 {
            return Err(Error::Config("concurrency limit must be positive".to_string()));
        }
        Ok(())
    }
}

fn parse_temperature(raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("OPENAI_TEMPERATURE is not a number: {}", raw)))?;

    if !(0.0..=2.0).contains(&value) {
        return Err(Error::Config(format!(
            "OPENAI_TEMPERATURE must be between 0 and 2, got {}",
            value
        )));
    }

    Ok(value)
}

/// Everything the backend invoker needs for a single call. Passed explicitly;
/// nothing here is read from the process environment at call time.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(60),
        }
    }
}

impl From<&Config> for BackendConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature() {
        assert_eq!(parse_temperature("0.1").unwrap(), 0.1);
        assert_eq!(parse_temperature(" 0 ").unwrap(), 0.0);
        assert!(parse_temperature("warm").is_err());
        assert!(parse_temperature("2.5").is_err());
        assert!(parse_temperature("-0.1").is_err());
    }

    #[test]
    fn test_backend_config_from_config() {
        let config = Config {
            openai_api_key: "sk-test".to_string(),
            openai_base_url: "http://localhost:8080/v1/".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            request_timeout_secs: 15,
            max_retries: 2,
            concurrency_limit: 4,
        };

        let backend = BackendConfig::from(&config);
        assert_eq!(backend.api_key, "sk-test");
        assert_eq!(backend.base_url, "http://localhost:8080/v1");
        assert_eq!(backend.model, "gpt-4o-mini");
        assert_eq!(backend.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_backend_config_defaults() {
        let backend = BackendConfig::new("sk-test");
        assert_eq!(backend.model, DEFAULT_MODEL);
        assert_eq!(backend.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(backend.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config {
            openai_api_key: "sk-test".to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: 0,
            max_retries: 0,
            concurrency_limit: 4,
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.request_timeout_secs = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            Config::from_env_with_key("   ".to_string()),
            Err(Error::Config(_))
        ));
    }
}
