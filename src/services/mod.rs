pub mod document_service;
pub mod generation_service;
pub mod llm_service;

pub use document_service::DocumentProcessor;
pub use generation_service::GenerationService;
pub use llm_service::{CompletionClient, LlmService};
