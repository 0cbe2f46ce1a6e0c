//! Document text extraction for the supported upload formats.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use zip::ZipArchive;

use crate::errors::{AppError, AppResult};
use crate::validation;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Extracts plain text from uploaded documents and applies the length gates
/// around it. Stateless apart from the configured minimum length.
pub struct DocumentProcessor {
    min_document_length: usize,
}

impl DocumentProcessor {
    pub fn new(min_document_length: usize) -> Self {
        Self {
            min_document_length,
        }
    }

    /// Extracts text from the upload, dispatching on the filename extension.
    /// Fails for unsupported formats and for documents with no usable text.
    pub fn extract_text(&self, filename: &str, content: &[u8]) -> AppResult<String> {
        let file_ext = validation::file_extension(filename);

        let text = match file_ext.as_str() {
            ".docx" => extract_text_from_docx(content)?,
            ".pdf" => extract_text_from_pdf(content)?,
            other => {
                return Err(AppError::ExtractionError(format!(
                    "Unsupported file type: {}. Supported types: .docx, .pdf",
                    other
                )))
            }
        };

        validation::validate_document_length(&text, self.min_document_length)?;
        Ok(text)
    }

    /// Left-substring truncation for the prompt. No ellipsis; the model
    /// tolerates incomplete trailing context.
    pub fn truncate_for_llm(text: &str, max_length: usize) -> String {
        text.chars().take(max_length).collect()
    }

    /// Display truncation, with an ellipsis when the text was cut.
    pub fn document_preview(text: &str, preview_length: usize) -> String {
        if text.chars().count() > preview_length {
            let prefix: String = text.chars().take(preview_length).collect();
            format!("{}...", prefix)
        } else {
            text.to_string()
        }
    }
}

/// Collapses runs of whitespace into single spaces.
pub fn clean_text(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Pulls the paragraph text out of `word/document.xml` inside the docx
/// archive. Paragraphs are joined with blank lines, empty ones skipped.
fn extract_text_from_docx(content: &[u8]) -> AppResult<String> {
    let cursor = Cursor::new(content);
    let mut archive = ZipArchive::new(cursor)
        .map_err(|e| AppError::ExtractionError(format!("Failed to read DOCX document: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::ExtractionError(format!("Failed to read DOCX document: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::ExtractionError(format!("Failed to read DOCX document: {}", e)))?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(current.trim().to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let chunk = t.unescape().map_err(|e| {
                    AppError::ExtractionError(format!("Failed to read DOCX document: {}", e))
                })?;
                current.push_str(&chunk);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::ExtractionError(format!(
                    "Failed to read DOCX document: {}",
                    e
                )))
            }
        }
    }

    let document_text = paragraphs.join("\n\n");
    if document_text.is_empty() {
        return Err(AppError::ExtractionError(
            "Document contains no text".to_string(),
        ));
    }

    Ok(document_text)
}

fn extract_text_from_pdf(content: &[u8]) -> AppResult<String> {
    let text = pdf_extract::extract_text_from_mem(content)
        .map_err(|e| AppError::ExtractionError(format!("Failed to read PDF document: {}", e)))?;

    if text.trim().is_empty() {
        return Err(AppError::ExtractionError(
            "No extractable text found in PDF".to_string(),
        ));
    }

    Ok(text)
}
