#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use common::{STORYBOOK_DOCS, docprobe_cmd, stdout_json};
use predicates::prelude::*;

#[test]
fn normalize_prints_segment() {
    let cases = [
        ("Button", "components-button"),
        ("Email Input", "components-email-input"),
        ("Text Area", "components-input-textarea"),
        ("Checkbox", "components-input-checkbox"),
        ("Accordion", "components-accordion"),
    ];

    for (name, segment) in cases {
        docprobe_cmd()
            .arg("normalize")
            .args(name.split(' '))
            .assert()
            .success()
            .stdout(format!("{segment}\n"));
    }
}

#[test]
fn normalize_json_reports_rule() {
    let output = docprobe_cmd()
        .args(["normalize", "--format", "json", "Text", "Area"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["kebab"], "text-area");
    assert_eq!(value["segment"], "components-input-textarea");
    assert_eq!(value["rule"], "text_area_override");
}

#[test]
fn normalize_without_name_exits_one() {
    docprobe_cmd()
        .arg("normalize")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing component name"));
}

#[test]
fn candidates_lists_all_patterns_in_order() {
    docprobe_cmd()
        .args(["candidates", "Button"])
        .assert()
        .success()
        .stdout(format!(
            "{STORYBOOK_DOCS}components-button-readme--docs\n\
             {STORYBOOK_DOCS}components-button---docs\n\
             {STORYBOOK_DOCS}components-button---readme\n"
        ));
}

#[test]
fn candidates_json() {
    let output = docprobe_cmd()
        .args(["candidates", "--json", "Radio"])
        .output()
        .unwrap();

    let value = stdout_json(&output);
    let candidates = value["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0]["suffix"], "readme--docs");
    assert_eq!(candidates[2]["suffix"], "--readme");
    assert_eq!(value["segment"], "components-input-radio");
}

#[test]
fn completions_generate_script() {
    docprobe_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docprobe"));
}
