use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] taifu_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
        }
    }
}
