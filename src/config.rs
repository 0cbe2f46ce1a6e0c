use std::env;

/// Immutable service configuration, built once at startup and shared through
/// `AppState`. Validation limits live here rather than in module-level
/// constants so tests can run with different limits.
#[derive(Clone, Debug)]
pub struct Config {
    pub service_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub allowed_file_types: Vec<String>,
    pub min_questions: i64,
    pub max_questions: i64,
    pub default_questions: i64,
    pub max_document_length: usize,
    pub min_document_length: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            service_name: "Question Generator API".to_string(),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            llm_max_tokens: env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(3000),
            allowed_file_types: vec![".docx".to_string(), ".pdf".to_string()],
            min_questions: 1,
            max_questions: 10,
            default_questions: 5,
            max_document_length: 3000,
            min_document_length: 10,
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            service_name: "Question Generator API".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            llm_api_base: "http://localhost:1234/v1".to_string(),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.0,
            llm_max_tokens: 256,
            allowed_file_types: vec![".docx".to_string(), ".pdf".to_string()],
            min_questions: 1,
            max_questions: 10,
            default_questions: 5,
            max_document_length: 3000,
            min_document_length: 10,
        }
    }
}
