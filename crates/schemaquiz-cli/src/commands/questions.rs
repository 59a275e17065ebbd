//! The `schemaquiz questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::config::load_config_from;

pub fn execute(question_set_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let questions = super::resolve_question_set(question_set_path.as_deref(), &config)?;

    println!("{} ({} questions)", questions.name, questions.len());

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Question", "Embed on", "Reference on"]);
    for (i, q) in questions.questions().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.id),
            Cell::new(&q.text),
            Cell::new(q.embed_label),
            Cell::new(q.reference_label),
        ]);
    }

    println!("{table}");
    Ok(())
}
