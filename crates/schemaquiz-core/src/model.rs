//! Core data model types for schemaquiz.
//!
//! Questions, the two possible answers, the strategy each answer counts
//! toward, and the recommendation derived from the tally.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;
use crate::questions;

/// One of the two choices offered for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// The other answer.
    pub fn opposite(self) -> Self {
        match self {
            Answer::Yes => Answer::No,
            Answer::No => Answer::Yes,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No => write!(f, "No"),
        }
    }
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            other => Err(format!("unknown answer: {other} (expected yes or no)")),
        }
    }
}

/// The modeling strategy an answer counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Embed,
    Reference,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Embed => write!(f, "embed"),
            Strategy::Reference => write!(f, "reference"),
        }
    }
}

/// A single yes/no question.
///
/// Polarity varies per question: some favor embedding on "Yes", others on "No".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique key within its question set.
    pub id: String,
    /// The question shown to the user.
    pub text: String,
    /// The answer that counts toward embedding.
    pub embed_label: Answer,
    /// The answer that counts toward referencing.
    pub reference_label: Answer,
}

impl Question {
    /// Build a question whose reference label is the opposite of `embed_label`.
    pub fn new(id: impl Into<String>, text: impl Into<String>, embed_label: Answer) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            embed_label,
            reference_label: embed_label.opposite(),
        }
    }

    /// Which strategy the given answer counts toward for this question.
    pub fn strategy_for(&self, answer: Answer) -> Strategy {
        if answer == self.embed_label {
            Strategy::Embed
        } else {
            Strategy::Reference
        }
    }
}

/// An ordered, immutable collection of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    /// Unique identifier for this question set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description shown before the first question.
    pub description: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set, rejecting anything the engine cannot score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestionSet` if the set is empty, an id is
    /// repeated, or a question uses the same answer for both strategies.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidQuestionSet(
                "a question set needs at least one question".into(),
            ));
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "duplicate question id: {}",
                    q.id
                )));
            }
            if q.embed_label == q.reference_label {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "question {} uses {} for both embed and reference",
                    q.id, q.embed_label
                )));
            }
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            questions,
        })
    }

    /// The built-in "embed or reference?" questionnaire.
    pub fn builtin() -> Self {
        Self {
            id: questions::BUILTIN_ID.to_string(),
            name: questions::BUILTIN_NAME.to_string(),
            description: questions::BUILTIN_DESCRIPTION.to_string(),
            questions: questions::builtin_questions(),
        }
    }

    /// Questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` for sets built through [`QuestionSet::new`].
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Zero-based position of a question id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }
}

/// The advice shown once the quiz is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Embed,
    Reference,
    Either,
}

impl Recommendation {
    /// The sentence shown in the results panel.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Embed => {
                "Based on your answers, embedding would be a better choice for your use case."
            }
            Recommendation::Reference => {
                "Based on your answers, using references would be a better choice for your use case."
            }
            Recommendation::Either => {
                "Your answers suggest that either embedding or referencing could work. \
                 Consider other factors specific to your use case."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Embed => write!(f, "embed"),
            Recommendation::Reference => write!(f, "reference"),
            Recommendation::Either => write!(f, "either"),
        }
    }
}
