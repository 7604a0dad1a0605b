//! Path helpers for user secrets locations.
//!
//! Responsibilities:
//! - Determine the platform-appropriate location of a user secrets store.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Parsing secrets files (see `providers::user_secrets`).

use std::path::{Component, Path, PathBuf};

use crate::constants::{APP_NAME, USER_SECRETS_DIR_NAME, USER_SECRETS_FILE_NAME};
use crate::error::SourceError;

/// Returns the default path of the secrets file for `user_secrets_id`.
///
/// - Linux: `~/.config/hostconf/user-secrets/<id>/secrets.json`
/// - macOS: `~/Library/Application Support/hostconf/user-secrets/<id>/secrets.json`
/// - Windows: `%AppData%\hostconf\config\user-secrets\<id>\secrets.json`
pub fn default_user_secrets_path(user_secrets_id: &str) -> Result<PathBuf, SourceError> {
    validate_user_secrets_id(user_secrets_id)?;
    let proj_dirs =
        directories::ProjectDirs::from("", "", APP_NAME).ok_or(SourceError::ConfigDirUnavailable)?;

    Ok(proj_dirs
        .config_dir()
        .join(USER_SECRETS_DIR_NAME)
        .join(user_secrets_id)
        .join(USER_SECRETS_FILE_NAME))
}

/// Reject ids that are empty or would escape the secrets directory.
pub(crate) fn validate_user_secrets_id(user_secrets_id: &str) -> Result<(), SourceError> {
    let invalid = || SourceError::InvalidUserSecretsId(user_secrets_id.to_string());

    if user_secrets_id.trim().is_empty() || user_secrets_id.contains(['/', '\\']) {
        return Err(invalid());
    }
    let mut components = Path::new(user_secrets_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}
