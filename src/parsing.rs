//! Best-effort parsers that turn a free-text LLM completion into structured
//! question records.
//!
//! All parsers share one structural contract: split the completion on the
//! `Question <n>:` marker, discard everything before the first marker, and
//! treat each remaining segment as one candidate record. A segment missing a
//! required field is dropped silently; partial success is preferred over
//! failing the whole request because the model under-delivered.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{FillBlankRecord, McqRecord, QaRecord};

static QUESTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Question \d+:").expect("question marker pattern is valid"));

/// Candidate segments of a completion, preamble discarded.
fn segments(text: &str) -> impl Iterator<Item = &str> {
    QUESTION_MARKER.split(text).skip(1)
}

/// Text after the first colon, trimmed. Splitting on the first colon only
/// keeps answer text containing further colons intact.
fn after_first_colon(line: &str) -> Option<&str> {
    line.splitn(2, ':').nth(1).map(str::trim)
}

pub fn parse_mcqs(text: &str) -> Vec<McqRecord> {
    let mut records = Vec::new();

    for segment in segments(text) {
        let lines: Vec<&str> = segment.trim().split('\n').collect();
        // A well-formed MCQ block needs a question, four options and an
        // answer line; anything shorter is degenerate.
        if lines.len() < 5 {
            continue;
        }

        let question = lines[0].trim().to_string();
        let mut options: BTreeMap<String, String> = BTreeMap::new();
        let mut correct_answer: Option<String> = None;

        for line in &lines[1..] {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("A)") {
                options.insert("A".to_string(), rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("B)") {
                options.insert("B".to_string(), rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("C)") {
                options.insert("C".to_string(), rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("D)") {
                options.insert("D".to_string(), rest.trim().to_string());
            } else if line.starts_with("Correct Answer:") {
                correct_answer = after_first_colon(line).map(str::to_string);
            }
        }

        // The answer is kept as-is, even when it is not a single letter.
        if let Some(correct_answer) = correct_answer {
            if !question.is_empty() && options.len() == 4 && !correct_answer.is_empty() {
                records.push(McqRecord {
                    question,
                    options,
                    correct_answer,
                });
            }
        }
    }

    records
}

pub fn parse_questions(text: &str) -> Vec<QaRecord> {
    let mut records = Vec::new();

    for segment in segments(text) {
        let lines: Vec<&str> = segment.trim().split('\n').collect();
        if lines.len() < 2 {
            continue;
        }

        let question = lines[0].trim().to_string();
        let mut answer: Option<String> = None;

        for line in &lines[1..] {
            let line = line.trim();
            if line.to_lowercase().starts_with("answer:") {
                answer = after_first_colon(line).map(str::to_string);
                break;
            }
        }

        if let Some(answer) = answer {
            if !question.is_empty() && !answer.is_empty() {
                records.push(QaRecord { question, answer });
            }
        }
    }

    records
}

pub fn parse_fill_in_blanks(text: &str) -> Vec<FillBlankRecord> {
    let mut records = Vec::new();

    for segment in segments(text) {
        let lines: Vec<&str> = segment.trim().split('\n').collect();
        if lines.len() < 2 {
            continue;
        }

        let mut question: Option<String> = None;
        let mut blank_answer: Option<String> = None;
        let mut context: Option<String> = None;

        for line in &lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let lowered = line.to_lowercase();
            if question.is_none() {
                // First non-empty line is the sentence with the blank
                question = Some(line.to_string());
            } else if lowered.starts_with("blank answer:") {
                blank_answer = after_first_colon(line).map(str::to_string);
            } else if lowered.starts_with("context:") {
                context = after_first_colon(line).map(str::to_string);
            }
        }

        if let (Some(question), Some(blank_answer)) = (question, blank_answer) {
            if !question.is_empty() && !blank_answer.is_empty() {
                records.push(FillBlankRecord {
                    question,
                    blank_answer,
                    context,
                });
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED_MCQS: &str = "Here are your questions:

Question 1: What enforces memory safety in Rust?
A) The garbage collector
B) The borrow checker
C) The linker
D) The allocator
Correct Answer: B

Question 2: Which keyword declares an immutable binding?
A) let
B) mut
C) static
D) const
Correct Answer: A

Thanks for using the service!";

    #[test]
    fn test_parse_mcqs_well_formed() {
        let mcqs = parse_mcqs(WELL_FORMED_MCQS);

        assert_eq!(mcqs.len(), 2);
        assert_eq!(mcqs[0].question, "What enforces memory safety in Rust?");
        assert_eq!(mcqs[0].options["B"], "The borrow checker");
        assert_eq!(mcqs[0].correct_answer, "B");
        assert_eq!(
            mcqs[1].question,
            "Which keyword declares an immutable binding?"
        );
        assert_eq!(mcqs[1].correct_answer, "A");
    }

    #[test]
    fn test_parse_mcqs_empty_and_markerless_input() {
        assert!(parse_mcqs("").is_empty());
        assert!(parse_mcqs("no markers here").is_empty());
    }

    #[test]
    fn test_parse_mcqs_preamble_and_trailing_noise_discarded() {
        let mcqs = parse_mcqs(WELL_FORMED_MCQS);
        assert!(mcqs
            .iter()
            .all(|m| !m.question.contains("Here are your questions")));
    }

    #[test]
    fn test_parse_mcqs_drops_block_with_missing_option() {
        let text = "Question 1: Incomplete question?
A) First
B) Second
C) Third
Correct Answer: A

Question 2: Complete question?
A) First
B) Second
C) Third
D) Fourth
Correct Answer: D";

        let mcqs = parse_mcqs(text);

        // The 3-option block is dropped entirely, never partially included
        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].question, "Complete question?");
    }

    #[test]
    fn test_parse_mcqs_drops_block_without_answer() {
        let text = "Question 1: No answer here?
A) First
B) Second
C) Third
D) Fourth
Some trailing commentary";

        assert!(parse_mcqs(text).is_empty());
    }

    #[test]
    fn test_parse_mcqs_skips_short_segments() {
        let text = "Question 1: First real question?
A) a
B) b
C) c
D) d
Correct Answer: C

Question 2: Second real question?
A) a
B) b
C) c
D) d
Correct Answer: D

Question 3: Too short
Correct Answer: A";

        let mcqs = parse_mcqs(text);

        assert_eq!(mcqs.len(), 2);
        assert_eq!(mcqs[1].question, "Second real question?");
    }

    #[test]
    fn test_parse_mcqs_answer_split_on_first_colon_only() {
        let text = "Question 1: Colons in answers?
A) a
B) b
C) c
D) d
Correct Answer: A) extra: info";

        let mcqs = parse_mcqs(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].correct_answer, "A) extra: info");
    }

    #[test]
    fn test_parse_mcqs_keeps_nonletter_answers() {
        // The answer is not validated against {A,B,C,D}
        let text = "Question 1: Permissive answer field?
A) a
B) b
C) c
D) d
Correct Answer: E";

        let mcqs = parse_mcqs(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].correct_answer, "E");
    }

    #[test]
    fn test_parse_mcqs_interleaved_malformed_blocks() {
        let text = "Question 1: Good one?
A) a
B) b
C) c
D) d
Correct Answer: A

Question 2: Broken
A) only option

Question 3: Another good one?
A) a
B) b
C) c
D) d
Correct Answer: D";

        let mcqs = parse_mcqs(text);

        assert_eq!(mcqs.len(), 2);
        assert_eq!(mcqs[0].question, "Good one?");
        assert_eq!(mcqs[1].question, "Another good one?");
    }

    #[test]
    fn test_parse_questions_well_formed() {
        let text = "Question 1: What is ownership?
Answer: A set of rules governing how memory is managed

Question 2: What does the ? operator do?
Answer: Propagates errors to the caller";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is ownership?");
        assert_eq!(
            questions[1].answer,
            "Propagates errors to the caller"
        );
    }

    #[test]
    fn test_parse_questions_answer_prefix_case_insensitive() {
        let text = "Question 1: Case test?
ANSWER: yes it matches";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "yes it matches");
    }

    #[test]
    fn test_parse_questions_first_colon_only() {
        let text = "Question 1: Ratio?
Answer: 16:9 is widescreen";

        let questions = parse_questions(text);
        assert_eq!(questions[0].answer, "16:9 is widescreen");
    }

    #[test]
    fn test_parse_questions_drops_block_without_answer() {
        let text = "Question 1: Where is the answer?
There is commentary but no labelled answer line

Question 2: Valid one?
Answer: yes";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Valid one?");
    }

    #[test]
    fn test_parse_questions_single_line_segment_rejected() {
        assert!(parse_questions("Question 1: Lonely line").is_empty());
    }

    #[test]
    fn test_parse_fill_in_blanks_well_formed() {
        let text = "Question 1: Rust guarantees memory safety without a ___.
Blank Answer: garbage collector
Context: Safety comes from compile-time ownership rules.

Question 2: The ___ trait enables shared-reference copying.
Blank Answer: Copy";

        let blanks = parse_fill_in_blanks(text);

        assert_eq!(blanks.len(), 2);
        assert_eq!(blanks[0].blank_answer, "garbage collector");
        assert_eq!(
            blanks[0].context.as_deref(),
            Some("Safety comes from compile-time ownership rules.")
        );
        // Missing context stays absent rather than dropping the record
        assert_eq!(blanks[1].context, None);
    }

    #[test]
    fn test_parse_fill_in_blanks_drops_block_without_blank_answer() {
        let text = "Question 1: Something with a ___ here.
Context: context but no answer";

        assert!(parse_fill_in_blanks(text).is_empty());
    }

    #[test]
    fn test_parse_fill_in_blanks_skips_blank_lines_before_question() {
        let text = "Question 1: \n\nThe ___ keyword makes a binding mutable.
Blank Answer: mut";

        let blanks = parse_fill_in_blanks(text);

        assert_eq!(blanks.len(), 1);
        assert_eq!(blanks[0].question, "The ___ keyword makes a binding mutable.");
    }

    #[test]
    fn test_parse_fill_in_blanks_labels_case_insensitive() {
        let text = "Question 1: Futures are ___ until polled.
blank answer: lazy
CONTEXT: Rust futures do nothing until awaited.";

        let blanks = parse_fill_in_blanks(text);

        assert_eq!(blanks.len(), 1);
        assert_eq!(blanks[0].blank_answer, "lazy");
        assert_eq!(
            blanks[0].context.as_deref(),
            Some("Rust futures do nothing until awaited.")
        );
    }

    #[test]
    fn test_records_preserve_source_order() {
        let mut text = String::new();
        for i in 1..=4 {
            text.push_str(&format!(
                "Question {i}: Question number {i}?\nAnswer: answer {i}\n\n"
            ));
        }

        let questions = parse_questions(&text);

        assert_eq!(questions.len(), 4);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.question, format!("Question number {}?", i + 1));
        }
    }
}
