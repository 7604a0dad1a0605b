//! Shared test utilities for hostconf integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores host configuration.
//!
//! Invariants / Assumptions:
//! - Tests read environment variables only through `--env-prefix TEST_PREFIX`.
//! - `HOSTCONF_*` variables from the host never leak into a test run.

use assert_cmd::Command;

/// Prefix under which tests pass environment variables to the binary.
pub const TEST_PREFIX: &str = "HOSTCONF_TEST_";

/// Returns a hermetic `hostconf` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Tool settings from the host (`HOSTCONF_*`) are cleared.
/// - Only variables under [`TEST_PREFIX`] are read as configuration.
pub fn hostconf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hostconf");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("HOSTCONF_USER_SECRETS_ID")
        .env_remove("HOSTCONF_USER_SECRETS_PATH")
        .env_remove("HOSTCONF_ENV_PREFIX");

    cmd.args(["--env-prefix", TEST_PREFIX]);
    cmd
}
