use actix_multipart::form::{bytes::Bytes as UploadedFile, text::Text, MultipartForm};
use actix_web::{post, web, HttpRequest, HttpResponse};
use secrecy::SecretString;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::dto::GenerationResponse,
    services::LlmService,
};

const API_KEY_HEADER: &str = "groq-api-key";

#[derive(Debug, MultipartForm)]
pub struct GenerateForm {
    #[multipart(limit = "10MB")]
    pub file: UploadedFile,
    pub num_questions: Option<Text<i64>>,
    pub topic: Option<Text<String>>,
}

/// Pulls the provider credential from the request header. The value is
/// wrapped immediately so it never ends up in logs.
fn api_key(req: &HttpRequest) -> AppResult<SecretString> {
    req.headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(|value| SecretString::from(value.to_string()))
        .ok_or_else(|| {
            AppError::ValidationError(format!("Missing required header: {}", API_KEY_HEADER))
        })
}

fn upload_filename(file: &UploadedFile) -> AppResult<String> {
    file.file_name
        .clone()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::ValidationError("Uploaded file has no filename".to_string()))
}

#[post("/generate-mcqs")]
async fn generate_mcqs(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: MultipartForm<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    let key = api_key(&req)?;
    let form = form.into_inner();
    let filename = upload_filename(&form.file)?;
    let num_questions = form
        .num_questions
        .map(Text::into_inner)
        .unwrap_or(state.config.default_questions);

    let llm = LlmService::new(&key, &state.config);
    let generated = state
        .generation_service
        .generate_mcqs(&llm, &filename, &form.file.data, num_questions)
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponse::success(
        filename,
        generated.records,
        generated.raw_response,
    )))
}

#[post("/generate-questions")]
async fn generate_questions(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: MultipartForm<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    let key = api_key(&req)?;
    let form = form.into_inner();
    let filename = upload_filename(&form.file)?;
    let num_questions = form
        .num_questions
        .map(Text::into_inner)
        .unwrap_or(state.config.default_questions);

    let llm = LlmService::new(&key, &state.config);
    let generated = state
        .generation_service
        .generate_questions(&llm, &filename, &form.file.data, num_questions)
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponse::success(
        filename,
        generated.records,
        generated.raw_response,
    )))
}

#[post("/generate-fill-in-blanks")]
async fn generate_fill_in_blanks(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: MultipartForm<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    let key = api_key(&req)?;
    let form = form.into_inner();
    let filename = upload_filename(&form.file)?;
    let num_questions = form
        .num_questions
        .map(Text::into_inner)
        .unwrap_or(state.config.default_questions);

    let llm = LlmService::new(&key, &state.config);
    let generated = state
        .generation_service
        .generate_fill_in_blanks(&llm, &filename, &form.file.data, num_questions)
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponse::success(
        filename,
        generated.records,
        generated.raw_response,
    )))
}

#[post("/generate-topic-mcqs")]
async fn generate_topic_mcqs(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: MultipartForm<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    let key = api_key(&req)?;
    let form = form.into_inner();
    let filename = upload_filename(&form.file)?;
    let num_questions = form
        .num_questions
        .map(Text::into_inner)
        .unwrap_or(state.config.default_questions);
    let topic = form
        .topic
        .map(Text::into_inner)
        .filter(|topic| !topic.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError("Missing required field: topic".to_string()))?;

    let llm = LlmService::new(&key, &state.config);
    let generated = state
        .generation_service
        .generate_topic_mcqs(&llm, &filename, &form.file.data, num_questions, &topic)
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponse::success(
        filename,
        generated.records,
        generated.raw_response,
    )))
}
