//! Terminal rendering of question cards and the results panel.

use std::io::{self, Write};

use comfy_table::{Cell, Table};

use schemaquiz_core::engine::Tally;
use schemaquiz_core::model::{Answer, Question, QuestionSet, Recommendation};

pub fn write_intro<W: Write>(out: &mut W, questions: &QuestionSet) -> io::Result<()> {
    writeln!(out, "{}", questions.name)?;
    writeln!(out, "{}", "=".repeat(questions.name.chars().count()))?;
    if !questions.description.is_empty() {
        writeln!(out, "{}", questions.description)?;
    }
    writeln!(out)
}

/// One question card; `index` is zero-based.
pub fn write_card<W: Write>(
    out: &mut W,
    index: usize,
    question: &Question,
    selected: Option<Answer>,
) -> io::Result<()> {
    let mark = |choice: Answer| if selected == Some(choice) { "x" } else { " " };
    writeln!(out, "Question {}", index + 1)?;
    writeln!(out, "{}", question.text)?;
    writeln!(
        out,
        "  [{}] Yes   [{}] No",
        mark(Answer::Yes),
        mark(Answer::No)
    )
}

pub fn write_results<W: Write>(
    out: &mut W,
    tally: &Tally,
    recommendation: Recommendation,
) -> io::Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Embed Answers", "Reference Answers"]);
    table.add_row(vec![Cell::new(tally.embed), Cell::new(tally.reference)]);

    writeln!(out, "\nQuiz Results")?;
    writeln!(out, "{table}")?;
    writeln!(out, "Recommendation:")?;
    writeln!(out, "{}", recommendation.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_marks_selected_answer() {
        let q = Question::new("archival", "Archived together?", Answer::Yes);
        let mut out = Vec::new();
        write_card(&mut out, 4, &q, Some(Answer::No)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Question 5\n"));
        assert!(text.contains("[ ] Yes   [x] No"));
    }

    #[test]
    fn results_panel_shows_counts_and_message() {
        let mut out = Vec::new();
        let tally = Tally {
            embed: 7,
            reference: 4,
        };
        write_results(&mut out, &tally, tally.recommendation()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Quiz Results"));
        assert!(text.contains("Embed Answers"));
        assert!(text.contains('7'));
        assert!(text.contains("embedding would be a better choice"));
    }
}
