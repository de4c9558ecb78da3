

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::error::{BlogsmithError, Result};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a technical blog writer. \
Write a complete, well-structured blog post in Markdown. \
Start with a single '# ' title line, then the body. Do not add frontmatter.";


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogsmithConfig {
    
    pub primary_provider: String,
    pub primary_model: String,
    pub primary_api_key: Option<String>,
    pub primary_base_url: Option<String>,

    
    pub secondary_provider: String,
    pub secondary_model: String,
    pub secondary_api_key: Option<String>,
    pub secondary_base_url: Option<String>,

    
    pub temperature: f64,
    pub system_prompt: String,
    pub timeout: u64,

    /// Primary attempts before switching to the secondary provider.
    pub max_retries: u32,
    /// Backoff unit; the wait after the n-th failed attempt is n times this.
    pub retry_base_delay_ms: u64,
}

impl BlogsmithConfig {
    
    pub fn new(primary_provider: &str, secondary_provider: &str) -> Self {
        Self {
            primary_provider: primary_provider.to_string(),
            primary_model: "llama-3.3-70b".to_string(),
            primary_api_key: None,
            primary_base_url: None,

            secondary_provider: secondary_provider.to_string(),
            secondary_model: "llama3.2".to_string(),
            secondary_api_key: None,
            secondary_base_url: None,

            temperature: 0.7,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: 120,

            max_retries: 2,
            retry_base_delay_ms: 1000,
        }
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(
            &lookup("BLOGSMITH_PRIMARY_PROVIDER").unwrap_or_else(|| "cerebras".to_string()),
            &lookup("BLOGSMITH_SECONDARY_PROVIDER").unwrap_or_else(|| "ollama".to_string()),
        );

        if let Some(model) = lookup("BLOGSMITH_PRIMARY_MODEL") {
            config.primary_model = model;
        }
        if let Some(key) = lookup("BLOGSMITH_PRIMARY_API_KEY") {
            config.primary_api_key = Some(key);
        }
        if let Some(url) = lookup("BLOGSMITH_PRIMARY_BASE_URL") {
            config.primary_base_url = Some(url);
        }
        if let Some(model) = lookup("BLOGSMITH_SECONDARY_MODEL") {
            config.secondary_model = model;
        }
        if let Some(key) = lookup("BLOGSMITH_SECONDARY_API_KEY") {
            config.secondary_api_key = Some(key);
        }
        if let Some(url) = lookup("BLOGSMITH_SECONDARY_BASE_URL") {
            config.secondary_base_url = Some(url);
        }
        if let Some(prompt) = lookup("BLOGSMITH_SYSTEM_PROMPT") {
            config.system_prompt = prompt;
        }
        if let Some(temperature) = lookup("BLOGSMITH_TEMPERATURE").and_then(|t| t.parse().ok()) {
            config.temperature = temperature;
        }
        if let Some(retries) = lookup("BLOGSMITH_MAX_RETRIES").and_then(|r| r.parse().ok()) {
            config.max_retries = retries;
        }
        if let Some(delay) = lookup("BLOGSMITH_RETRY_BASE_DELAY_MS").and_then(|d| d.parse().ok()) {
            config.retry_base_delay_ms = delay;
        }
        if let Some(timeout) = lookup("BLOGSMITH_TIMEOUT_SECS").and_then(|t| t.parse().ok()) {
            config.timeout = timeout;
        }

        config
    }

    /// Checks base URLs and the temperature range. Provider names and API keys
    /// are checked when the adapters are built.
    pub fn validate(&self) -> Result<()> {
        for base_url in [&self.primary_base_url, &self.secondary_base_url]
            .into_iter()
            .flatten()
        {
            Url::parse(base_url).map_err(|e| {
                BlogsmithError::Config(format!("invalid base URL '{base_url}': {e}"))
            })?;
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(BlogsmithError::Config(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }

        if self.timeout == 0 {
            return Err(BlogsmithError::Config("timeout must be positive".to_string()));
        }

        Ok(())
    }
}

impl Default for BlogsmithConfig {
    fn default() -> Self {
        Self::new("cerebras", "ollama")
    }
}
