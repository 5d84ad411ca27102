use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The value a practice supplied for one assessment question.
///
/// The form layer produces numbers, booleans, free text, or multi-select
/// lists; the scoring layer only cares about the shape, never the question
/// definition itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResponseValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ResponseValue {
    /// Truthiness used by compliance flag evaluation: `true`, non-zero,
    /// non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            ResponseValue::Bool(b) => *b,
            ResponseValue::Number(n) => *n != 0.0,
            ResponseValue::Text(s) => !s.is_empty(),
            ResponseValue::List(items) => !items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionResponse {
    pub question_id: String,
    pub value: ResponseValue,
    pub timestamp: jiff::Timestamp,
}
