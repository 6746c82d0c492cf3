use thiserror::Error;

/// Chat command usage failures.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    /// Wrong or missing arguments; carries the usage line.
    #[error("⚠️ Usage: `{0}`")]
    Usage(String),

    /// Argument present but not understood.
    #[error("⚠️ {0}")]
    InvalidArgument(String),

    /// Invoking member lacks a manager role.
    #[error("⛔ You don't have permission to use `!{0}`.")]
    PermissionDenied(String),

    /// Command needs a guild context.
    #[error("⚠️ This command only works inside the server.")]
    GuildOnly,

    /// Commands are paused while the alliance is on vacation.
    #[error("🏖️ The bot is on vacation, commands are paused. `!commands` still works.")]
    Vacation,

    /// Only managers may run commands while testing.
    #[error("🧪 The bot is in test mode, only managers can use commands right now.")]
    TestMode,

    /// Command needs configuration that is absent.
    #[error("⚠️ `!{command}` is not configured: {missing}")]
    NotConfigured { command: String, missing: String },
}
