use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] feedpub_core::ValidationError),

    #[error(transparent)]
    Registry(#[from] feedpub_core::RegistryError),

    #[error(transparent)]
    Export(#[from] feedpub_core::ExportError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Registry(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Export(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use feedpub_core::ValidationError;

    #[test]
    fn maps_error_categories_to_exit_codes() {
        assert_eq!(
            CliError::Validation(ValidationError::MissingMinDelay).exit_code(),
            2
        );
        assert_eq!(
            CliError::StrictModeViolation {
                warning_count: 1,
                error_count: 0
            }
            .exit_code(),
            5
        );
        assert_eq!(
            CliError::Export(feedpub_core::ExportError::Unsuccessful).exit_code(),
            10
        );
    }
}
