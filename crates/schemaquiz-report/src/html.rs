//! HTML report generator.
//!
//! Produces a self-contained HTML page with all CSS/JS inlined: one card per
//! question with the chosen answer highlighted, followed by the results panel.

use anyhow::{Context, Result};
use std::path::Path;

use schemaquiz_core::engine::Tally;
use schemaquiz_core::model::Answer;
use schemaquiz_core::report::QuizReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape(&report.question_set.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{}</h1>\n",
        html_escape(&report.question_set.name)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | {}</p>\n",
        report.question_set.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Question cards
    html.push_str("<section class=\"questions\">\n");
    for (i, a) in report.answers.iter().enumerate() {
        html.push_str("<div class=\"card\">\n");
        html.push_str(&format!("<h2>Question {}</h2>\n", i + 1));
        html.push_str(&format!("<p>{}</p>\n", html_escape(&a.text)));
        html.push_str("<div class=\"choices\">");
        for choice in [Answer::Yes, Answer::No] {
            let class = if choice == a.answer {
                "choice selected"
            } else {
                "choice"
            };
            html.push_str(&format!("<span class=\"{class}\">{choice}</span>"));
        }
        html.push_str("</div>\n");
        html.push_str(&format!(
            "<p class=\"favors\">Counts toward: {}</p>\n",
            a.favors
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    // Results panel
    html.push_str("<section class=\"results\" id=\"results\">\n");
    html.push_str("<h2>Quiz Results</h2>\n");
    html.push_str("<div class=\"counters\">\n");
    html.push_str(&format!(
        "<div><p class=\"count\">{}</p><p>Embed Answers</p></div>\n",
        report.tally.embed
    ));
    html.push_str(&format!(
        "<div><p class=\"count\">{}</p><p>Reference Answers</p></div>\n",
        report.tally.reference
    ));
    html.push_str("</div>\n");
    html.push_str(&generate_tally_chart(&report.tally));
    html.push_str("<p class=\"label\">Recommendation:</p>\n");
    html.push_str(&format!(
        "<p class=\"recommendation\">{}</p>\n",
        html_escape(report.recommendation.message())
    ));
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &QuizReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn generate_tally_chart(tally: &Tally) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 120;

    let total = tally.total().max(1) as f64;
    let rows = [
        ("Embed", tally.embed, "#00ed64"),
        ("Reference", tally.reference, "#016bf8"),
    ];

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        rows.len() * (bar_height + padding) + padding
    );

    for (i, (label, count, color)) in rows.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (*count as f64 / total * max_width as f64) as usize;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            label
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #f8fafc; --fg: #0f172a; --card: #fff; --border: #e2e8f0; --accent: #00684a; --muted: #64748b; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #0f172a; --fg: #f1f5f9; --card: #1e293b; --border: #334155; --accent: #00ed64; --muted: #94a3b8; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 60rem; padding: 2rem; background: var(--bg); color: var(--fg); }
header { text-align: center; }
h1 { color: var(--accent); }
.meta, .favors { color: var(--muted); }
.card, .results { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 1.5rem; margin: 1.5rem 0; text-align: center; }
.choices { display: flex; justify-content: center; gap: 1rem; }
.choice { padding: 0.6rem 1.5rem; border-radius: 8px; border: 1px solid var(--border); font-weight: 600; }
.choice.selected { background: var(--accent); color: #fff; border-color: var(--accent); }
.counters { display: flex; justify-content: center; gap: 3rem; }
.count { font-size: 2.5rem; font-weight: bold; color: var(--accent); margin: 0; }
.recommendation { font-size: 1.15rem; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem auto; display: block; }
"#;

const JS: &str = r#"
window.addEventListener('load', () => {
  document.getElementById('results').scrollIntoView({ behavior: 'smooth' });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use schemaquiz_core::model::{Recommendation, Strategy};
    use schemaquiz_core::report::{AnsweredQuestion, QuestionSetSummary};

    fn make_test_report() -> QuizReport {
        QuizReport {
            id: uuid::Uuid::nil(),
            created_at: chrono::Utc::now(),
            question_set: QuestionSetSummary {
                id: "test".into(),
                name: "Test <Set>".into(),
                question_count: 2,
            },
            answers: vec![
                AnsweredQuestion {
                    question_id: "a".into(),
                    text: "Is it \"has-a\"?".into(),
                    answer: Answer::Yes,
                    favors: Strategy::Embed,
                },
                AnsweredQuestion {
                    question_id: "b".into(),
                    text: "Does it grow without bound?".into(),
                    answer: Answer::Yes,
                    favors: Strategy::Reference,
                },
            ],
            tally: Tally {
                embed: 1,
                reference: 1,
            },
            recommendation: Recommendation::Either,
        }
    }

    #[test]
    fn html_report_contains_cards_and_results() {
        let report = make_test_report();
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Question 1"));
        assert!(html.contains("Question 2"));
        assert!(html.contains("Quiz Results"));
        assert!(html.contains("either embedding or referencing could work"));
        assert_eq!(html.matches("choice selected").count(), 2);
    }

    #[test]
    fn html_report_escapes_text() {
        let html = generate_html(&make_test_report());
        assert!(html.contains("Test &lt;Set&gt;"));
        assert!(html.contains("Is it &quot;has-a&quot;?"));
        assert!(!html.contains("Test <Set>"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }

    #[test]
    fn html_report_write_error_names_the_path() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let path = blocker.join("report.html");
        let err = write_html_report(&report, &path).unwrap_err();
        assert!(format!("{err:#}").contains(&blocker.display().to_string()));

        let err = write_html_report(&report, dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to write HTML report"));
    }
}
