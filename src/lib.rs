

pub mod core;
pub mod generation;
pub mod llm;
pub mod utils;

pub use crate::core::config::BlogsmithConfig;
pub use crate::core::error::{BlogsmithError, Result};
pub use generation::{ContentSource, FallbackOrchestrator, GenerationResult, PostDraft, RetryPolicy};
pub use llm::{LlmProvider, LlmProviderFactory};
