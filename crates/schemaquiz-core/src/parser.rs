//! TOML question-set parser.
//!
//! Loads custom question sets from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Answer, Question, QuestionSet};

/// Intermediate TOML structure for parsing question-set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    embed_label: String,
    #[serde(default)]
    reference_label: Option<String>,
}

fn parse_answer(raw: &str, question_id: &str, field: &str) -> Result<Answer> {
    raw.parse::<Answer>()
        .map_err(|e| anyhow::anyhow!("question {question_id}: {field}: {e}"))
}

/// A question set as written, before engine invariants are enforced.
///
/// Kept separate from [`QuestionSet`] so `validate` can report every problem
/// instead of stopping at the first.
#[derive(Debug, Clone)]
pub struct QuestionSetDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl QuestionSetDraft {
    /// Enforce engine invariants and produce a usable question set.
    pub fn build(self) -> Result<QuestionSet> {
        let id = self.id.clone();
        QuestionSet::new(self.id, self.name, self.description, self.questions)
            .with_context(|| format!("question set {id} cannot be used"))
    }
}

/// Parse a single TOML file into a draft question set.
pub fn parse_question_draft(path: &Path) -> Result<QuestionSetDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_draft_str(&content, path)
}

/// Parse a TOML string into a draft question set (useful for testing).
pub fn parse_question_draft_str(content: &str, source_path: &Path) -> Result<QuestionSetDraft> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let embed_label = parse_answer(&q.embed_label, &q.id, "embed_label")?;
            let reference_label = match q.reference_label {
                Some(raw) => parse_answer(&raw, &q.id, "reference_label")?,
                None => embed_label.opposite(),
            };
            Ok(Question {
                id: q.id,
                text: q.text,
                embed_label,
                reference_label,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionSetDraft {
        id: parsed.question_set.id,
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions,
    })
}

/// Parse a TOML file into a ready-to-use `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    parse_question_draft(path)?.build()
}

/// Parse a TOML string into a ready-to-use `QuestionSet`.
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    parse_question_draft_str(content, source_path)?.build()
}

/// Everything found while walking a question-set directory.
#[derive(Debug, Default)]
pub struct DirectoryLoad {
    /// Files that parsed, in path order.
    pub sets: Vec<QuestionSetDraft>,
    /// Files that could not be read or parsed, with the reason.
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

/// Recursively load all `.toml` question-set drafts from a directory.
///
/// Unparseable files do not abort the walk; they are collected in
/// [`DirectoryLoad::failures`].
pub fn load_question_directory(dir: &Path) -> Result<DirectoryLoad> {
    let mut load = DirectoryLoad::default();
    walk_question_directory(dir, &mut load)?;
    Ok(load)
}

fn walk_question_directory(dir: &Path, load: &mut DirectoryLoad) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            walk_question_directory(&path, load)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_draft(&path) {
                Ok(set) => load.sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                    load.failures.push((path, e));
                }
            }
        }
    }

    Ok(())
}

/// A warning from question-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a draft question set for common issues.
pub fn validate_question_set(set: &QuestionSetDraft) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "question set has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for q in &set.questions {
        if q.id.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: "question with an empty id".into(),
            });
        } else if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }

        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "question text is empty".into(),
            });
        }

        if q.embed_label == q.reference_label {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!(
                    "embed_label and reference_label are both {}",
                    q.embed_label
                ),
            });
        }
    }

    warnings
}
