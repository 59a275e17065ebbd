//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use schemaquiz_core::model::QuestionSet;
use schemaquiz_core::parser;

use crate::config::SchemaquizConfig;

pub mod init;
pub mod questions;
pub mod show;
pub mod take;
pub mod validate;

/// Pick the question set: `--question-set`, then config, then the built-in one.
pub(crate) fn resolve_question_set(
    explicit: Option<&Path>,
    config: &SchemaquizConfig,
) -> Result<QuestionSet> {
    match explicit.or(config.question_set.as_deref()) {
        Some(path) => {
            tracing::debug!("using question set {}", path.display());
            parser::parse_question_set(path)
        }
        None => Ok(QuestionSet::builtin()),
    }
}
