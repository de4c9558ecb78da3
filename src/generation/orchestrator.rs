

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::result::GenerationResult;
use crate::core::config::BlogsmithConfig;
use crate::core::error::Result;
use crate::llm::factory::LlmProviderFactory;
use crate::llm::providers::base::{LlmProvider, LlmProviderError};
use crate::utils::preview;

const PROMPT_PREVIEW_CHARS: usize = 60;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Zero is treated as a single attempt.
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Wait after the `attempt`-th failure (1-based) before trying again.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_secs(1))
    }
}


/// Tries the primary provider with backoff, then the secondary provider once.
///
/// Holds no per-call state; every `generate` runs independently.
pub struct FallbackOrchestrator {
    primary: Arc<dyn LlmProvider>,
    secondary: Arc<dyn LlmProvider>,
    system_prompt: String,
    policy: RetryPolicy,
}

impl FallbackOrchestrator {
    
    pub fn new(
        primary: Arc<dyn LlmProvider>,
        secondary: Arc<dyn LlmProvider>,
        system_prompt: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        info!(
            "FallbackOrchestrator initialized: primary={}/{}, secondary={}/{}, retries={}",
            primary.provider_name(),
            primary.model_name(),
            secondary.provider_name(),
            secondary.model_name(),
            policy.attempts()
        );

        Self {
            primary,
            secondary,
            system_prompt: system_prompt.into(),
            policy,
        }
    }

    
    pub fn from_config(config: &BlogsmithConfig) -> Result<Self> {
        config.validate()?;
        let primary = LlmProviderFactory::primary_from_config(config)?;
        let secondary = LlmProviderFactory::secondary_from_config(config)?;
        Ok(Self::new(
            primary,
            secondary,
            config.system_prompt.clone(),
            RetryPolicy::new(config.max_retries, config.retry_base_delay()),
        ))
    }

    /// Generates with the configured retry count.
    pub async fn generate(&self, prompt: &str) -> GenerationResult {
        self.generate_with_retries(prompt, self.policy.max_retries).await
    }

    
    pub async fn generate_with_retries(&self, prompt: &str, max_retries: u32) -> GenerationResult {
        let policy = RetryPolicy::new(max_retries, self.policy.base_delay);
        debug!("Generating for prompt: {}", preview(prompt, PROMPT_PREVIEW_CHARS));

        let primary_error = match self.try_primary(prompt, policy).await {
            Ok(content) => return GenerationResult::primary(content),
            Err(e) => e,
        };

        warn!(
            "Falling back to {} ({}) due to: {}",
            self.secondary.provider_name(),
            self.secondary.model_name(),
            primary_error
        );

        match self.secondary.generate(&self.system_prompt, prompt).await {
            Ok((content, metadata)) => {
                info!(
                    "Fallback successful: provider={}, tokens={:?}",
                    metadata.provider, metadata.tokens_total
                );
                GenerationResult::secondary(content)
            }
            Err(secondary_error) => {
                warn!("Secondary provider {} failed: {}", self.secondary.provider_name(), secondary_error);
                GenerationResult::failed(
                    format!(
                        "Both primary and secondary failed: primary={primary_error}, secondary={secondary_error}"
                    ),
                    true,
                )
            }
        }
    }

    /// Returns the content of the first successful attempt, or the last error.
    async fn try_primary(
        &self,
        prompt: &str,
        policy: RetryPolicy,
    ) -> std::result::Result<String, LlmProviderError> {
        let attempts = policy.attempts();
        let mut attempt = 1;

        loop {
            match self.primary.generate(&self.system_prompt, prompt).await {
                Ok((content, metadata)) => {
                    info!(
                        "Primary provider {} succeeded on attempt {}/{} (tokens={:?})",
                        metadata.provider, attempt, attempts, metadata.tokens_total
                    );
                    return Ok(content);
                }
                Err(e) if attempt < attempts => {
                    let delay = policy.delay_after(attempt);
                    warn!(
                        "Primary provider {} failed (attempt {}/{}): {}; retrying in {:?}",
                        self.primary.provider_name(),
                        attempt,
                        attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(
                        "Primary provider {} failed (attempt {}/{}): {}",
                        self.primary.provider_name(),
                        attempt,
                        attempts,
                        e
                    );
                    return Err(e);
                }
            }
        }
    }
}
