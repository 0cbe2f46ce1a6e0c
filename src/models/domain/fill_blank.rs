use serde::{Deserialize, Serialize};

/// One parsed fill-in-the-blank item. The question text contains a `___`
/// marker; `context` is optional and serialized as null when the model
/// omitted it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FillBlankRecord {
    pub question: String,
    pub blank_answer: String,
    pub context: Option<String>,
}
