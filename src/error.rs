use thiserror::Error;

/// Why a line typed at the prompt is not an answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize problem: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
