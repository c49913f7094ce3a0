//! docprobe - find Sikt design system Storybook documentation for a component

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    docprobe_cli::run().await
}
