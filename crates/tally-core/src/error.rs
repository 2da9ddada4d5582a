use thiserror::Error;

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Debug, Error)]
pub enum TallyError {
    /// An item could not be turned into a hashable value
    #[error("invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] tally_config::ConfigError),
}

impl TallyError {
    pub fn invalid_input(line: usize, reason: impl Into<String>) -> Self {
        TallyError::InvalidInput {
            line,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TallyError::InvalidInput { .. })
    }
}
