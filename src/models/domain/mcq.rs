use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One parsed multiple-choice question.
///
/// `options` always carries exactly the keys "A" through "D" when produced by
/// the parser. `correct_answer` is whatever followed the `Correct Answer:`
/// label; it is deliberately not constrained to a single letter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqRecord {
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub correct_answer: String,
}
