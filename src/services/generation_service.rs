//! Orchestrates one generation request: validate, extract, truncate, render,
//! complete, parse. Any failing stage short-circuits the rest.

use std::sync::Arc;

use crate::config::Config;
use crate::constants::prompts;
use crate::errors::AppResult;
use crate::models::domain::{FillBlankRecord, McqRecord, QaRecord};
use crate::parsing;
use crate::services::document_service::DocumentProcessor;
use crate::services::llm_service::CompletionClient;
use crate::validation;

/// Parsed records plus the unparsed completion they came from.
#[derive(Debug)]
pub struct ParsedGeneration<T> {
    pub records: Vec<T>,
    pub raw_response: String,
}

pub struct GenerationService {
    config: Arc<Config>,
    documents: Arc<DocumentProcessor>,
}

impl GenerationService {
    pub fn new(config: Arc<Config>, documents: Arc<DocumentProcessor>) -> Self {
        Self { config, documents }
    }

    /// Validation and extraction stages, shared by every question style.
    /// Runs entirely before the LLM call so invalid input never spends quota.
    fn prepare_document(
        &self,
        filename: &str,
        content: &[u8],
        num_questions: i64,
    ) -> AppResult<String> {
        validation::validate_file(filename, &self.config.allowed_file_types)?;
        validation::validate_num_questions(
            num_questions,
            self.config.min_questions,
            self.config.max_questions,
        )?;

        let text = self.documents.extract_text(filename, content)?;
        Ok(DocumentProcessor::truncate_for_llm(
            &text,
            self.config.max_document_length,
        ))
    }

    pub async fn generate_mcqs(
        &self,
        llm: &dyn CompletionClient,
        filename: &str,
        content: &[u8],
        num_questions: i64,
    ) -> AppResult<ParsedGeneration<McqRecord>> {
        let document_text = self.prepare_document(filename, content, num_questions)?;
        let prompt =
            prompts::render_prompt(prompts::MCQ_PROMPT_TEMPLATE, &document_text, num_questions);

        let raw_response = llm.complete(&prompt).await?;
        let records = parsing::parse_mcqs(&raw_response);
        log::info!("parsed {} of {} requested MCQs", records.len(), num_questions);

        Ok(ParsedGeneration {
            records,
            raw_response,
        })
    }

    pub async fn generate_questions(
        &self,
        llm: &dyn CompletionClient,
        filename: &str,
        content: &[u8],
        num_questions: i64,
    ) -> AppResult<ParsedGeneration<QaRecord>> {
        let document_text = self.prepare_document(filename, content, num_questions)?;
        let prompt = prompts::render_prompt(
            prompts::QUESTION_PROMPT_TEMPLATE,
            &document_text,
            num_questions,
        );

        let raw_response = llm.complete(&prompt).await?;
        let records = parsing::parse_questions(&raw_response);
        log::info!(
            "parsed {} of {} requested questions",
            records.len(),
            num_questions
        );

        Ok(ParsedGeneration {
            records,
            raw_response,
        })
    }

    pub async fn generate_fill_in_blanks(
        &self,
        llm: &dyn CompletionClient,
        filename: &str,
        content: &[u8],
        num_questions: i64,
    ) -> AppResult<ParsedGeneration<FillBlankRecord>> {
        let document_text = self.prepare_document(filename, content, num_questions)?;
        let prompt = prompts::render_prompt(
            prompts::FILL_IN_THE_BLANKS_PROMPT_TEMPLATE,
            &document_text,
            num_questions,
        );

        let raw_response = llm.complete(&prompt).await?;
        let records = parsing::parse_fill_in_blanks(&raw_response);

        Ok(ParsedGeneration {
            records,
            raw_response,
        })
    }

    pub async fn generate_topic_mcqs(
        &self,
        llm: &dyn CompletionClient,
        filename: &str,
        content: &[u8],
        num_questions: i64,
        topic: &str,
    ) -> AppResult<ParsedGeneration<McqRecord>> {
        let document_text = self.prepare_document(filename, content, num_questions)?;
        let prompt = prompts::render_topic_prompt(
            prompts::TOPIC_MCQ_PROMPT_TEMPLATE,
            &document_text,
            num_questions,
            topic,
        );

        let raw_response = llm.complete(&prompt).await?;
        let records = parsing::parse_mcqs(&raw_response);

        Ok(ParsedGeneration {
            records,
            raw_response,
        })
    }
}
