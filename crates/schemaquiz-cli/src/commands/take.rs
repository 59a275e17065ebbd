//! The `schemaquiz take` command.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use schemaquiz_core::engine::{QuizEvent, QuizObserver, QuizSession, QuizState};
use schemaquiz_core::model::{Answer, Question, QuestionSet};
use schemaquiz_core::report::QuizReport;
use schemaquiz_report::html::write_html_report;

use crate::config::load_config_from;
use crate::render;

/// Progress on stderr for non-interactive runs.
struct ConsoleObserver;

impl QuizObserver for ConsoleObserver {
    fn on_answer(&self, question_id: &str, answer: Answer, state: &QuizState) {
        eprintln!(
            "  Answered: {question_id} = {answer} ({}/{})",
            state.answered(),
            state.total()
        );
    }

    fn on_complete(&self, state: &QuizState) {
        eprintln!("\nComplete: all {} questions answered", state.total());
    }
}

pub fn execute(
    question_set_path: Option<PathBuf>,
    answers: Option<String>,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let questions = super::resolve_question_set(question_set_path.as_deref(), &config)?;

    // Check formats before the user spends time on the quiz
    let format = format.unwrap_or_else(|| config.default_format.clone());
    let formats = parse_formats(&format)?;
    let output = output.unwrap_or_else(|| config.output_dir.clone());

    let (questions, state) = match answers {
        Some(list) => {
            let parsed = parse_answer_list(&list)?;
            let mut session = QuizSession::with_observer(questions, ConsoleObserver);
            for (id, answer) in &parsed {
                session.record_answer(id, *answer)?;
            }
            let recommendation = session.recommendation()?;
            render::write_results(
                &mut io::stdout().lock(),
                &session.state().tally(),
                recommendation,
            )?;
            session.into_parts()
        }
        None => {
            let mut session = QuizSession::new(questions);
            let reveal_delay = Duration::from_millis(config.reveal_delay_ms);
            run_interactive(
                &mut session,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                reveal_delay,
            )?;
            session.into_parts()
        }
    };

    save_reports(&questions, &state, &formats, &output)
}

/// Walk every question card, then let the user revise answers by number.
pub(crate) fn run_interactive<O, R, W>(
    session: &mut QuizSession<O>,
    input: &mut R,
    out: &mut W,
    reveal_delay: Duration,
) -> Result<()>
where
    O: QuizObserver,
    R: BufRead,
    W: Write,
{
    render::write_intro(out, session.questions())?;
    let questions = session.questions().questions().to_vec();

    for (i, q) in questions.iter().enumerate() {
        let Some(answer) = ask(input, out, i, q, session.state().answer_for(&q.id))? else {
            anyhow::bail!(
                "input ended after {} of {} questions",
                session.state().answered(),
                questions.len()
            );
        };
        let events = session.record_answer(&q.id, answer)?;
        writeln!(out)?;

        for event in &events {
            if let QuizEvent::Completed { tally } = event {
                out.flush()?;
                std::thread::sleep(reveal_delay);
                render::write_results(out, tally, tally.recommendation())?;
            }
        }
    }

    loop {
        write!(
            out,
            "\nEnter a question number to change its answer, or press Enter to finish: "
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let index = match line.parse::<usize>() {
            Ok(n) if (1..=questions.len()).contains(&n) => n - 1,
            _ => {
                writeln!(
                    out,
                    "Please enter a number between 1 and {}.",
                    questions.len()
                )?;
                continue;
            }
        };

        let q = &questions[index];
        let Some(answer) = ask(input, out, index, q, session.state().answer_for(&q.id))? else {
            break;
        };
        let events = session.record_answer(&q.id, answer)?;

        if events
            .iter()
            .any(|e| matches!(e, QuizEvent::Revised { .. }))
        {
            render::write_results(out, &session.state().tally(), session.recommendation()?)?;
        } else {
            writeln!(out, "Answer unchanged.")?;
        }
    }

    Ok(())
}

/// Show a card and prompt until a yes/no answer arrives. `None` on end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    index: usize,
    question: &Question,
    selected: Option<Answer>,
) -> Result<Option<Answer>> {
    render::write_card(out, index, question, selected)?;
    loop {
        write!(out, "Your answer [y/n]: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<Answer>() {
            Ok(answer) => return Ok(Some(answer)),
            Err(_) => writeln!(out, "Please answer y or n.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}

/// Parse `id=yes,id=no,...` into answers, in order.
fn parse_answer_list(list: &str) -> Result<Vec<(String, Answer)>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, raw) = entry.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("invalid answer entry '{entry}': expected <question-id>=yes|no")
            })?;
            let answer = raw
                .parse::<Answer>()
                .map_err(|e| anyhow::anyhow!("question {}: {e}", id.trim()))?;
            Ok((id.trim().to_string(), answer))
        })
        .collect()
}

fn parse_formats(format: &str) -> Result<Vec<&'static str>> {
    match format.trim() {
        "none" | "" => Ok(vec![]),
        "all" => Ok(vec!["json", "html", "markdown"]),
        list => list
            .split(',')
            .map(|f| match f.trim() {
                "json" => Ok("json"),
                "html" => Ok("html"),
                "markdown" | "md" => Ok("markdown"),
                other => Err(anyhow::anyhow!("unknown format: {other}")),
            })
            .collect(),
    }
}

fn save_reports(
    questions: &QuestionSet,
    state: &QuizState,
    formats: &[&str],
    output: &Path,
) -> Result<()> {
    if formats.is_empty() {
        return Ok(());
    }

    let report = QuizReport::from_state(questions, state)?;
    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    for fmt in formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("quiz-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("quiz-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "markdown" => {
                let path = output.join(format!("quiz-{timestamp}.md"));
                std::fs::write(&path, report.to_markdown())?;
                eprintln!("Markdown report: {}", path.display());
            }
            _ => {}
        }
    }

    Ok(())
}
