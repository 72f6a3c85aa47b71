//! Shared test utilities for preflight CLI integration tests.
//!
//! Provides a hermetic command factory: rule keys that may leak in from
//! the host environment are cleared so every test starts from a known
//! state. Tests that need a settings file (or the absence of one) point
//! `--env-file` into a tempdir instead of relying on the working
//! directory.

use assert_cmd::Command;

/// Returns a hermetic `preflight` command for integration testing.
pub fn preflight_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("preflight");

    // Clear potential host leakage for every key in the default registry
    cmd.env_remove("PROJECT_NAME")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .env_remove("GITHUB_TOKEN");

    cmd
}
