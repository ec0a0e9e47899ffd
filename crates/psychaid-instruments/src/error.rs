use thiserror::Error;

use crate::scoring::AnswerError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),

    #[error("questionnaire incomplete: {missing} of {total} questions unanswered")]
    Incomplete { missing: usize, total: usize },
}
