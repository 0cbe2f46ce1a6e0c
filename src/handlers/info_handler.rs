use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::HealthResponse};

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to Question Generator API",
        "documentation": "Visit /info for API details",
        "health": "Check /health for status"
    }))
}

#[get("/health")]
async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[get("/info")]
async fn info(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.config;
    let num_questions_help = format!(
        "Number of questions ({}-{}, default: {})",
        config.min_questions, config.max_questions, config.default_questions
    );
    let file_help = format!("Document file ({})", config.allowed_file_types.join(" or "));

    HttpResponse::Ok().json(serde_json::json!({
        "title": config.service_name,
        "description": "Generate questions from Word and PDF documents using an LLM",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /generate-mcqs": {
                "description": "Generate multiple choice questions from a document",
                "request_headers": {
                    "groq-api-key": "Your Groq API key (required)"
                },
                "request_body": {
                    "file": file_help,
                    "num_questions": num_questions_help
                }
            },
            "POST /generate-questions": {
                "description": "Generate general questions with answers from a document",
                "request_headers": {
                    "groq-api-key": "Your Groq API key (required)"
                },
                "request_body": {
                    "file": file_help,
                    "num_questions": num_questions_help
                }
            },
            "POST /generate-fill-in-blanks": {
                "description": "Generate fill-in-the-blank questions from a document",
                "request_headers": {
                    "groq-api-key": "Your Groq API key (required)"
                },
                "request_body": {
                    "file": file_help,
                    "num_questions": num_questions_help
                }
            },
            "POST /generate-topic-mcqs": {
                "description": "Generate multiple choice questions focused on a topic",
                "request_headers": {
                    "groq-api-key": "Your Groq API key (required)"
                },
                "request_body": {
                    "file": file_help,
                    "num_questions": num_questions_help,
                    "topic": "Topic the questions should focus on (required)"
                }
            },
            "GET /health": "Check if the API is running",
            "GET /info": "Get API information and documentation"
        }
    }))
}
