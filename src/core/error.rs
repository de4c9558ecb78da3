

use thiserror::Error;


#[derive(Error, Debug)]
pub enum BlogsmithError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM provider error: {0}")]
    LlmProvider(String),

    #[error("Generation failed: {0}")]
    Generation(String),
}

impl From<crate::llm::providers::LlmProviderError> for BlogsmithError {
    fn from(err: crate::llm::providers::LlmProviderError) -> Self {
        Self::LlmProvider(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, BlogsmithError>;
