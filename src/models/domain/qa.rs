use serde::{Deserialize, Serialize};

/// One parsed open question with its answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}
