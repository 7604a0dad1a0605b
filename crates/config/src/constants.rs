//! Centralized constants for the hostconf workspace.
//!
//! This module contains default priorities, key conventions and well-known
//! names used across crates to avoid magic value duplication.

// =============================================================================
// Key Conventions
// =============================================================================

/// Separator between segments of a hierarchical key path (`db.host`).
pub const KEY_DELIMITER: &str = ".";

/// Separator that stands in for [`KEY_DELIMITER`] in environment variable
/// and `.env` names, since most shells reject `.` in variable names.
pub const ENV_HIERARCHY_SEPARATOR: &str = "__";

// =============================================================================
// Default Source Priorities
// =============================================================================

/// Default priority for sources that do not ask for anything else.
pub const DEFAULT_PRIORITY: i32 = 0;

/// Priority of `.env` file values; below the process environment.
pub const DOTENV_PRIORITY: i32 = -10;

/// Priority of process environment variables.
pub const ENVIRONMENT_PRIORITY: i32 = 0;

/// Priority of JSON settings files.
pub const JSON_FILE_PRIORITY: i32 = 0;

/// Priority of the per-developer user secrets store.
///
/// Equal to [`ENVIRONMENT_PRIORITY`], so registration order decides: user
/// secrets registered after the environment override it.
pub const USER_SECRETS_PRIORITY: i32 = 0;

/// Priority of OS keyring lookups.
pub const KEYRING_PRIORITY: i32 = 0;

/// Priority of command-line overrides; above every other built-in source.
pub const COMMAND_LINE_PRIORITY: i32 = 100;

// =============================================================================
// Well-known Names
// =============================================================================

/// Application name used for platform directories and the keyring service.
pub const APP_NAME: &str = "hostconf";

/// File name of a user secrets store inside its id directory.
pub const USER_SECRETS_FILE_NAME: &str = "secrets.json";

/// Directory (under the platform config dir) holding all user secrets stores.
pub const USER_SECRETS_DIR_NAME: &str = "user-secrets";

/// Environment variable that overrides the user secrets file location.
pub const USER_SECRETS_PATH_VAR: &str = "HOSTCONF_USER_SECRETS_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Placeholder printed instead of sensitive values.
pub const REDACTED: &str = "<redacted>";
