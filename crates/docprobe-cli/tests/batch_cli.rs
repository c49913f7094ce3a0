#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use common::{STORYBOOK_DOCS, docprobe_cmd};
use predicates::prelude::*;

#[test]
fn batch_no_validate_jsonl_keeps_input_order() {
    let output = docprobe_cmd()
        .args(["batch", "--no-validate", "-f", "jsonl", "Button", "Email Input", "Checkbox"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let components: Vec<&str> = rows
        .iter()
        .map(|row| row["component"].as_str().unwrap())
        .collect();
    assert_eq!(components, ["Button", "Email Input", "Checkbox"]);
    assert_eq!(
        rows[2]["url"],
        format!("{STORYBOOK_DOCS}components-input-checkbox-readme--docs")
    );
}

#[test]
fn batch_reads_names_from_stdin() {
    docprobe_cmd()
        .args(["batch", "--no-validate", "--file", "-"])
        .write_stdin("# components\nAccordion\n\nText Area\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accordion"))
        .stdout(predicate::str::contains("components-input-textarea-readme--docs"));
}

#[test]
fn batch_without_names_exits_one() {
    docprobe_cmd()
        .arg("batch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing component names"));
}

#[test]
fn batch_rejects_blank_name() {
    docprobe_cmd()
        .args(["batch", "--no-validate", "Button", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));
}
