//! Report persistence integration tests.
//!
//! Takes a quiz non-interactively with reports enabled, then reads the saved
//! report back through `schemaquiz show`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn schemaquiz(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("schemaquiz").unwrap();
    cmd.env("HOME", home)
        .env_remove("SCHEMAQUIZ_QUESTION_SET")
        .env_remove("RUST_LOG");
    cmd
}

fn find_with_extension(dir: &Path, ext: &str) -> PathBuf {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.extension().is_some_and(|e| e == ext))
        .unwrap_or_else(|| panic!("no .{ext} file in {}", dir.display()))
}

const CUSTOM_SET: &str = r#"
[question_set]
id = "pair"
name = "Two Questions"

[[questions]]
id = "together"
text = "Read together?"
embed_label = "yes"

[[questions]]
id = "unbounded"
text = "Grows without bound?"
embed_label = "no"
"#;

#[test]
fn take_saves_all_formats_and_show_reads_json() {
    let dir = TempDir::new().unwrap();
    let set_path = dir.path().join("pair.toml");
    std::fs::write(&set_path, CUSTOM_SET).unwrap();
    let out = dir.path().join("results");

    schemaquiz(dir.path())
        .arg("take")
        .arg("--question-set")
        .arg(&set_path)
        .arg("--answers")
        .arg("together=no,unbounded=yes")
        .arg("--format")
        .arg("all")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("using references"))
        .stderr(predicate::str::contains("Results saved to"));

    let json = find_with_extension(&out, "json");
    let html = std::fs::read_to_string(find_with_extension(&out, "html")).unwrap();
    let md = std::fs::read_to_string(find_with_extension(&out, "md")).unwrap();
    assert!(html.contains("Two Questions"));
    assert!(md.contains("Reference answers: **2**"));

    schemaquiz(dir.path())
        .arg("show")
        .arg("--report")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Questions"))
        .stdout(predicate::str::contains("Grows without bound?"))
        .stdout(predicate::str::contains("Quiz Results"));

    schemaquiz(dir.path())
        .arg("show")
        .arg("--report")
        .arg(&json)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recommendation\": \"reference\""));
}

#[test]
fn config_file_supplies_question_set_and_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pair.toml"), CUSTOM_SET).unwrap();
    std::fs::write(
        dir.path().join("schemaquiz.toml"),
        "question_set = \"pair.toml\"\nreveal_delay_ms = 0\noutput_dir = \"saved\"\ndefault_format = \"json\"\n",
    )
    .unwrap();

    schemaquiz(dir.path())
        .current_dir(dir.path())
        .arg("take")
        .arg("--answers")
        .arg("together=yes,unbounded=yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("either embedding or referencing"));

    let json = find_with_extension(&dir.path().join("saved"), "json");
    let report = std::fs::read_to_string(json).unwrap();
    assert!(report.contains("\"question_count\": 2"));
}

#[test]
fn question_set_env_var_overrides_config() {
    let dir = TempDir::new().unwrap();
    let set_path = dir.path().join("pair.toml");
    std::fs::write(&set_path, CUSTOM_SET).unwrap();
    std::fs::write(
        dir.path().join("schemaquiz.toml"),
        "question_set = \"missing.toml\"\n",
    )
    .unwrap();

    schemaquiz(dir.path())
        .env("SCHEMAQUIZ_QUESTION_SET", &set_path)
        .current_dir(dir.path())
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Questions (2 questions)"));
}

#[test]
fn empty_question_set_env_var_is_ignored() {
    let dir = TempDir::new().unwrap();

    schemaquiz(dir.path())
        .env("SCHEMAQUIZ_QUESTION_SET", "")
        .current_dir(dir.path())
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("(11 questions)"));
}

#[test]
fn home_config_is_used_without_local_config() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let set_path = home.path().join("pair.toml");
    std::fs::write(&set_path, CUSTOM_SET).unwrap();

    let config_dir = home.path().join(".config").join("schemaquiz");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("question_set = {:?}\n", set_path.display().to_string()),
    )
    .unwrap();

    schemaquiz(home.path())
        .current_dir(work.path())
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Questions (2 questions)"));
}

#[test]
fn output_dir_expands_env_vars() {
    let dir = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pair.toml"), CUSTOM_SET).unwrap();
    std::fs::write(
        dir.path().join("schemaquiz.toml"),
        "question_set = \"pair.toml\"\noutput_dir = \"${SQ_REPORT_ROOT}/x\"\ndefault_format = \"json\"\n",
    )
    .unwrap();

    schemaquiz(dir.path())
        .env("SQ_REPORT_ROOT", root.path())
        .current_dir(dir.path())
        .arg("take")
        .arg("--answers")
        .arg("together=yes,unbounded=no")
        .assert()
        .success()
        .stdout(predicate::str::contains("embedding would be a better choice"));

    let json = find_with_extension(&root.path().join("x"), "json");
    let report = std::fs::read_to_string(json).unwrap();
    assert!(report.contains("\"recommendation\": \"embed\""));
}

#[test]
fn self_referencing_env_var_is_not_reexpanded() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pair.toml"), CUSTOM_SET).unwrap();
    std::fs::write(
        dir.path().join("schemaquiz.toml"),
        "question_set = \"pair.toml\"\noutput_dir = \"${SQ_LOOP}\"\ndefault_format = \"json\"\n",
    )
    .unwrap();

    schemaquiz(dir.path())
        .env("SQ_LOOP", "out-${SQ_LOOP}")
        .current_dir(dir.path())
        .timeout(Duration::from_secs(10))
        .arg("take")
        .arg("--answers")
        .arg("together=yes,unbounded=no")
        .assert()
        .success();

    find_with_extension(&dir.path().join("out-${SQ_LOOP}"), "json");
}

#[test]
fn show_nonexistent_report() {
    let dir = TempDir::new().unwrap();
    schemaquiz(dir.path())
        .arg("show")
        .arg("--report")
        .arg("no_such_file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read report"));
}
