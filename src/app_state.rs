use std::sync::Arc;

use crate::{
    config::Config,
    services::{DocumentProcessor, GenerationService},
};

/// Shared per-process state. The LLM client is deliberately absent: it is
/// built per request from the caller-supplied credential.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generation_service: Arc<GenerationService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let documents = Arc::new(DocumentProcessor::new(config.min_document_length));
        let generation_service = Arc::new(GenerationService::new(config.clone(), documents));

        Self {
            config,
            generation_service,
        }
    }
}
