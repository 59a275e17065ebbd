//! The `schemaquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use schemaquiz_core::parser::{self, DirectoryLoad, QuestionSetDraft};

/// Check a question-set file, or every `.toml` file under a directory.
///
/// Lint warnings are reported but do not fail the command; a file that
/// cannot be parsed does, as does a directory with nothing to check.
pub fn execute(question_set_path: PathBuf) -> Result<()> {
    let DirectoryLoad { sets, failures } = if question_set_path.is_dir() {
        parser::load_question_directory(&question_set_path)?
    } else {
        DirectoryLoad {
            sets: vec![parser::parse_question_draft(&question_set_path)?],
            failures: Vec::new(),
        }
    };

    let warning_count: usize = sets.iter().map(report_draft).sum();

    for (path, err) in &failures {
        println!("{}", path.display());
        println!("  ERROR: {err:#}");
    }

    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} question set file(s) could not be parsed",
            failures.len(),
            failures.len() + sets.len()
        );
    }
    anyhow::ensure!(
        !sets.is_empty(),
        "no question set files found in {}",
        question_set_path.display()
    );

    match warning_count {
        0 => println!("All question sets valid."),
        n => println!("\n{n} warning(s) found."),
    }
    Ok(())
}

/// Print one draft's header and lint warnings; returns the warning count.
fn report_draft(draft: &QuestionSetDraft) -> usize {
    println!(
        "Question set: {} ({} questions)",
        draft.name,
        draft.questions.len()
    );

    let warnings = parser::validate_question_set(draft);
    for w in &warnings {
        match &w.question_id {
            Some(id) => println!("  [{id}] WARNING: {}", w.message),
            None => println!("  WARNING: {}", w.message),
        }
    }
    warnings.len()
}
