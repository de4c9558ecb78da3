

use std::sync::Arc;
use std::time::Duration;

use super::providers::base::LlmProvider;
use super::providers::chat_completions::{
    CEREBRAS_BASE_URL, ChatCompletionsProvider, GROQ_BASE_URL, OPENAI_BASE_URL,
};
use super::providers::ollama::{OLLAMA_BASE_URL, OllamaProvider};
use crate::core::config::BlogsmithConfig;
use crate::core::error::{BlogsmithError, Result};

pub const SUPPORTED_PROVIDERS: &[&str] = &["cerebras", "openai", "groq", "openai-compatible", "ollama"];


pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Builds an adapter by provider name. Hosted providers need an API key;
    /// `openai-compatible` needs an explicit base URL instead.
    pub fn create(
        provider: &str,
        model: &str,
        api_key: Option<&str>,
        base_url: Option<&str>,
        temperature: f64,
        timeout: Duration,
    ) -> Result<Arc<dyn LlmProvider>> {
        let provider = provider.trim().to_lowercase();
        match provider.as_str() {
            "cerebras" | "openai" | "groq" => {
                let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    BlogsmithError::Config(format!("API key required for provider '{provider}'"))
                })?;
                let default_url = match provider.as_str() {
                    "cerebras" => CEREBRAS_BASE_URL,
                    "openai" => OPENAI_BASE_URL,
                    _ => GROQ_BASE_URL,
                };
                Ok(Arc::new(ChatCompletionsProvider::new(
                    provider.as_str(),
                    api_key,
                    model,
                    base_url.unwrap_or(default_url),
                    temperature,
                    timeout,
                )?))
            }
            "openai-compatible" => {
                let base_url = base_url.ok_or_else(|| {
                    BlogsmithError::Config("base URL required for provider 'openai-compatible'".to_string())
                })?;
                Ok(Arc::new(ChatCompletionsProvider::new(
                    provider.as_str(),
                    api_key.unwrap_or_default(),
                    model,
                    base_url,
                    temperature,
                    timeout,
                )?))
            }
            "ollama" => Ok(Arc::new(OllamaProvider::new(
                base_url.unwrap_or(OLLAMA_BASE_URL),
                model,
                temperature,
                timeout,
            )?)),
            other => Err(BlogsmithError::Config(format!(
                "Unknown provider: {other}. Supported: {}",
                SUPPORTED_PROVIDERS.join(", ")
            ))),
        }
    }

    
    pub fn primary_from_config(config: &BlogsmithConfig) -> Result<Arc<dyn LlmProvider>> {
        Self::create(
            &config.primary_provider,
            &config.primary_model,
            config.primary_api_key.as_deref(),
            config.primary_base_url.as_deref(),
            config.temperature,
            config.timeout(),
        )
    }

    
    pub fn secondary_from_config(config: &BlogsmithConfig) -> Result<Arc<dyn LlmProvider>> {
        Self::create(
            &config.secondary_provider,
            &config.secondary_model,
            config.secondary_api_key.as_deref(),
            config.secondary_base_url.as_deref(),
            config.temperature,
            config.timeout(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_create_ollama_provider() {
        let provider =
            LlmProviderFactory::create("ollama", "llama3.2", None, None, 0.7, TIMEOUT).unwrap();
        assert_eq!(provider.provider_name(), "ollama");
        assert_eq!(provider.model_name(), "llama3.2");
    }

    #[test]
    fn test_create_cerebras_provider() {
        let provider = LlmProviderFactory::create(
            "Cerebras",
            "llama-3.3-70b",
            Some("test-key"),
            None,
            0.3,
            TIMEOUT,
        )
        .unwrap();
        assert_eq!(provider.provider_name(), "cerebras");
    }

    #[test]
    fn test_hosted_provider_requires_api_key() {
        let result = LlmProviderFactory::create("openai", "gpt-4o-mini", None, None, 0.3, TIMEOUT);
        assert!(matches!(result, Err(BlogsmithError::Config(_))));
    }

    #[test]
    fn test_openai_compatible_requires_base_url() {
        assert!(
            LlmProviderFactory::create("openai-compatible", "m", None, None, 0.3, TIMEOUT).is_err()
        );
        assert!(
            LlmProviderFactory::create(
                "openai-compatible",
                "m",
                None,
                Some("http://localhost:8080/v1"),
                0.3,
                TIMEOUT
            )
            .is_ok()
        );
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let err = LlmProviderFactory::create("unknown", "model", None, None, 0.5, TIMEOUT)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn test_from_config() {
        let mut config = BlogsmithConfig::default();
        config.primary_api_key = Some("key".to_string());
        let primary = LlmProviderFactory::primary_from_config(&config).unwrap();
        let secondary = LlmProviderFactory::secondary_from_config(&config).unwrap();
        assert_eq!(primary.provider_name(), "cerebras");
        assert_eq!(secondary.provider_name(), "ollama");
    }
}
