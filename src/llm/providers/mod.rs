

pub mod base;
pub mod chat_completions;
pub mod ollama;

pub use base::{LlmMetadata, LlmProvider, LlmProviderError};
pub use chat_completions::ChatCompletionsProvider;
pub use ollama::OllamaProvider;
