//! Prompt templates for question generation.
//!
//! Each template is a fixed string with named placeholders. The generated
//! completion is expected to follow the `Question <n>:` block structure that
//! the parsers in [`crate::parsing`] split on.

pub const MCQ_PROMPT_TEMPLATE: &str = "Based on the following document content, generate {num_questions} multiple choice questions that test understanding of the key concepts.

Document:
{document_text}

For each question, generate in this exact format:

Question 1: [Question text here?]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]
Correct Answer: [A/B/C/D]

Repeat this format for all {num_questions} questions. Make them clear, specific, and relevant to the document content. Ensure options are plausible but the correct answer is unambiguous.";

pub const QUESTION_PROMPT_TEMPLATE: &str = "Based on the following document content, generate {num_questions} thoughtful and insightful questions that promote deeper understanding.

Document:
{document_text}

Generate {num_questions} questions in this format:

Question 1: [Your question here?]
Answer: [Concise answer]

Make questions clear, specific, and directly related to the document content.";

pub const FILL_IN_THE_BLANKS_PROMPT_TEMPLATE: &str = "Based on the following document content, generate {num_questions} fill-in-the-blanks questions.

Document:
{document_text}

For each question, create a sentence with a blank (represented by ___) and provide the answer. Generate in this exact format:

Question 1: [Sentence with a blank represented by ___]
Blank Answer: [The word or phrase that fills the blank]
Context: [Brief explanation or context]

Repeat this format for all {num_questions} questions. Make sure the blanks are meaningful and test understanding of key concepts. The blank should be significant enough that removing it requires comprehension of the material.";

pub const TOPIC_MCQ_PROMPT_TEMPLATE: &str = "Based on the following document and topic, generate {num_questions} questions.

Document:
{document_text}

Topic Focus: {topic}

Generate questions in this format:

Question 1: [Question about {topic}?]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]
Correct Answer: [A/B/C/D]

Ensure all questions are relevant to '{topic}'.";

/// Renders a template by pure substitution, no escaping.
///
/// The document text is substituted last so placeholder-looking content
/// inside the document never gets expanded.
pub fn render_prompt(template: &str, document_text: &str, num_questions: i64) -> String {
    template
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{document_text}", document_text)
}

pub fn render_topic_prompt(
    template: &str,
    document_text: &str,
    num_questions: i64,
    topic: &str,
) -> String {
    template
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{topic}", topic)
        .replace("{document_text}", document_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_substitutes_placeholders() {
        let rendered = render_prompt(MCQ_PROMPT_TEMPLATE, "Rust is a systems language.", 3);

        assert!(rendered.contains("generate 3 multiple choice questions"));
        assert!(rendered.contains("Rust is a systems language."));
        assert!(!rendered.contains("{document_text}"));
        assert!(!rendered.contains("{num_questions}"));
    }

    #[test]
    fn test_render_prompt_repeated_placeholder() {
        let rendered = render_prompt(QUESTION_PROMPT_TEMPLATE, "text", 7);
        assert_eq!(rendered.matches('7').count(), 2);
    }

    #[test]
    fn test_render_topic_prompt() {
        let rendered = render_topic_prompt(TOPIC_MCQ_PROMPT_TEMPLATE, "doc body", 5, "ownership");

        assert!(rendered.contains("Topic Focus: ownership"));
        assert!(rendered.contains("relevant to 'ownership'"));
        assert!(rendered.contains("doc body"));
        assert!(!rendered.contains("{topic}"));
    }

    #[test]
    fn test_document_text_is_substituted_last() {
        // Placeholder-looking text inside the document must survive rendering
        let rendered = render_prompt(MCQ_PROMPT_TEMPLATE, "literal {num_questions} here", 2);
        assert!(rendered.contains("literal {num_questions} here"));
    }
}
