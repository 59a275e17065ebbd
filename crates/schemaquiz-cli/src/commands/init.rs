//! The `schemaquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

/// Starter files written by `init`, relative to the current directory.
const STARTER_FILES: [(&str, &str); 2] = [
    ("schemaquiz.toml", SAMPLE_CONFIG),
    ("question-sets/example.toml", EXAMPLE_QUESTION_SET),
];

pub fn execute() -> Result<()> {
    for (relative, contents) in STARTER_FILES {
        let path = Path::new(relative);
        if path.exists() {
            println!("{relative} already exists, skipping.");
            continue;
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, contents).with_context(|| format!("failed to write {relative}"))?;
        println!("Created {relative}");
    }

    println!("\nNext steps:");
    println!("  schemaquiz take                       # the built-in quiz");
    println!("  schemaquiz validate --question-set question-sets/example.toml");
    println!("  schemaquiz take --question-set question-sets/example.toml");
    println!("Set `question_set` in schemaquiz.toml to make a custom set the default.");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# schemaquiz configuration

# Use a custom question set instead of the built-in one.
# question_set = "question-sets/example.toml"

# Pause before the results appear once every question is answered.
reveal_delay_ms = 100

# Where `take` saves reports, and in which format (none, json, html, markdown, all).
output_dir = "./schemaquiz-results"
default_format = "none"
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
id = "example"
name = "Example Question Set"
description = "A short question set to get started. Each question names the answer that favors embedding."

[[questions]]
id = "readTogether"
text = "Are the pieces of information almost always read together?"
embed_label = "yes"

[[questions]]
id = "sharedChild"
text = "Is the child data shared by many parents?"
embed_label = "no"

[[questions]]
id = "boundedChildren"
text = "Is the number of children small and bounded?"
embed_label = "yes"
reference_label = "no"
"#;
