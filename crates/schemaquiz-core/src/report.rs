//! Quiz result reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{QuizState, Tally};
use crate::error::QuizError;
use crate::model::{Answer, QuestionSet, Recommendation, Strategy};

/// A finished quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the question set.
    pub question_set: QuestionSetSummary,
    /// Every question with the answer given, in presentation order.
    pub answers: Vec<AnsweredQuestion>,
    pub tally: Tally,
    pub recommendation: Recommendation,
}

/// Summary of a question set (without the questions themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSetSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question_id: String,
    pub text: String,
    pub answer: Answer,
    /// The strategy this answer counted toward.
    pub favors: Strategy,
}

impl QuizReport {
    /// Build a report from a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` if any question is unanswered.
    pub fn from_state(questions: &QuestionSet, state: &QuizState) -> Result<Self, QuizError> {
        let recommendation = state.recommendation()?;

        let answers = questions
            .questions()
            .iter()
            .filter_map(|q| {
                state.answer_for(&q.id).map(|answer| AnsweredQuestion {
                    question_id: q.id.clone(),
                    text: q.text.clone(),
                    answer,
                    favors: q.strategy_for(answer),
                })
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question_set: QuestionSetSummary {
                id: questions.id.clone(),
                name: questions.name.clone(),
                question_count: questions.len(),
            },
            answers,
            tally: state.tally(),
            recommendation,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", self.question_set.name));
        md.push_str(&format!(
            "_{} questions, taken {}_\n\n",
            self.question_set.question_count,
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        md.push_str("| # | Question | Answer | Favors |\n");
        md.push_str("|---|----------|--------|--------|\n");
        for (i, a) in self.answers.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                a.text.replace('|', "\\|"),
                a.answer,
                a.favors
            ));
        }

        md.push_str("\n## Quiz Results\n\n");
        md.push_str(&format!("- Embed answers: **{}**\n", self.tally.embed));
        md.push_str(&format!(
            "- Reference answers: **{}**\n\n",
            self.tally.reference
        ));
        md.push_str(&format!(
            "**Recommendation:** {}\n",
            self.recommendation.message()
        ));
        md
    }
}
