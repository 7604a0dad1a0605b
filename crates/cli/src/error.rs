//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use hostconf_config::SourceError;

/// Structured exit codes for hostconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A configuration source failed to load (unreadable or malformed store).
    ///
    /// Scripts should fix the source or rerun with `--lenient`.
    SourceFailed = 3,

    /// The requested key is not defined in any source.
    ///
    /// Scripts should fall back to a default.
    KeyNotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait to derive an exit code from an error chain.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.chain().any(|cause| cause.is::<SourceError>()) {
            ExitCode::SourceFailed
        } else {
            ExitCode::GeneralError
        }
    }
}
