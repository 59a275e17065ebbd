//! Quiz engine error types.
//!
//! The engine itself has very few failure modes: answers are a closed enum,
//! so the only bad input is a question id that is not in the active set.

use thiserror::Error;

/// Errors raised by the quiz engine and question-set construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The question id does not belong to the active question set.
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// A recommendation or report was requested before every question was answered.
    #[error("quiz incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    /// The question set would break the engine invariants.
    #[error("invalid question set: {0}")]
    InvalidQuestionSet(String),
}

impl QuizError {
    /// Returns `true` if answering more questions could resolve this error.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, QuizError::Incomplete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_message_names_progress() {
        let err = QuizError::Incomplete {
            answered: 10,
            total: 11,
        };
        assert_eq!(err.to_string(), "quiz incomplete: 10 of 11 questions answered");
        assert!(err.is_incomplete());
        assert!(!QuizError::UnknownQuestion("x".into()).is_incomplete());
    }
}
