//! The `schemaquiz show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use schemaquiz_core::report::QuizReport;

use crate::render;

pub fn execute(report_path: PathBuf, format: String) -> Result<()> {
    let report = QuizReport::load_json(&report_path)?;

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // text format
            println!(
                "{} (taken {})",
                report.question_set.name,
                report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );

            let mut table = Table::new();
            table.set_header(vec!["#", "Question", "Answer", "Favors"]);
            for (i, a) in report.answers.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&a.text),
                    Cell::new(a.answer),
                    Cell::new(a.favors),
                ]);
            }
            println!("{table}");

            render::write_results(
                &mut std::io::stdout().lock(),
                &report.tally,
                report.recommendation,
            )?;
        }
    }

    Ok(())
}
