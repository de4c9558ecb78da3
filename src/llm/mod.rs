

pub mod factory;
pub mod providers;

pub use factory::LlmProviderFactory;
pub use providers::{LlmMetadata, LlmProvider, LlmProviderError};
