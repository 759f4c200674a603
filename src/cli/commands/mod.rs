//! CLI command implementations

pub mod export;
pub mod init;
pub mod validate;

/// Exit code for a complete success
pub const EXIT_OK: i32 = 0;
/// Exit code when some reaction rules could not be exported
pub const EXIT_PARTIAL: i32 = 1;
/// Exit code for configuration or input errors
pub const EXIT_INPUT_ERROR: i32 = 2;
/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;
