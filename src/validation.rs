//! Pure input validators, run before any LLM call is made.

use crate::errors::{AppError, AppResult};

/// Returns the lower-cased, dot-prefixed extension of `filename`.
///
/// A filename with no dot yields the whole name as the extension
/// (".report" for "report"). That quirk is part of the API contract
/// and is relied on by `validate_file`.
pub fn file_extension(filename: &str) -> String {
    let ext = filename.rsplit('.').next().unwrap_or(filename);
    format!(".{}", ext.to_lowercase())
}

pub fn validate_file(filename: &str, allowed_types: &[String]) -> AppResult<()> {
    let file_ext = file_extension(filename);
    if !allowed_types.iter().any(|allowed| allowed == &file_ext) {
        return Err(AppError::ValidationError(format!(
            "File must be one of {:?}. Got: {}",
            allowed_types, file_ext
        )));
    }
    Ok(())
}

/// Bounds are inclusive on both ends.
pub fn validate_num_questions(num_questions: i64, min_val: i64, max_val: i64) -> AppResult<()> {
    if num_questions < min_val || num_questions > max_val {
        return Err(AppError::ValidationError(format!(
            "num_questions must be between {} and {}",
            min_val, max_val
        )));
    }
    Ok(())
}

pub fn validate_document_length(text: &str, min_length: usize) -> AppResult<()> {
    if text.chars().count() < min_length {
        return Err(AppError::ValidationError(format!(
            "Document too short. Minimum {} characters required.",
            min_length
        )));
    }
    Ok(())
}
