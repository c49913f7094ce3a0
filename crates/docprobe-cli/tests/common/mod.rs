#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const STORYBOOK_DOCS: &str = "https://designsystem.sikt.no/storybook/?path=/docs/";

fn config_home() -> &'static Path {
    static CONFIG_HOME: OnceLock<TempDir> = OnceLock::new();
    CONFIG_HOME
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a `docprobe` command isolated from the user's config and environment.
#[allow(dead_code)]
pub fn docprobe_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docprobe"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("XDG_CONFIG_HOME", config_home());
    cmd.env("HOME", config_home());
    cmd.env_remove("DOCPROBE_CONFIG");
    cmd.env_remove("DOCPROBE_PROBE_TIMEOUT_SECS");
    cmd.env_remove("DOCPROBE_BATCH_CONCURRENCY");
    cmd.env_remove("DOCPROBE_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
