

pub mod draft;
pub mod orchestrator;
pub mod result;

pub use draft::PostDraft;
pub use orchestrator::{FallbackOrchestrator, RetryPolicy};
pub use result::{ContentSource, GenerationResult};
