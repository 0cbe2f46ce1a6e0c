use serde::Serialize;

/// Response body for every generation endpoint. `raw_response` carries the
/// unparsed completion for audit and debugging.
#[derive(Debug, Serialize)]
pub struct GenerationResponse<T: Serialize> {
    pub status: String,
    pub filename: String,
    pub num_questions_generated: usize,
    pub questions: Vec<T>,
    pub raw_response: String,
}

impl<T: Serialize> GenerationResponse<T> {
    pub fn success(filename: impl Into<String>, questions: Vec<T>, raw_response: String) -> Self {
        Self {
            status: "success".to_string(),
            filename: filename.into(),
            num_questions_generated: questions.len(),
            questions,
            raw_response,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
