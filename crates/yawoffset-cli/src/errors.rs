use thiserror::Error;
use yawoffset_core::ParamsError;

/// Errors raised while loading inputs and replaying them through the estimator
#[derive(Debug, Error)]
pub enum OffsetCliError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ParamsError),

    #[error("{kind} file not found: {path}")]
    InputFileNotFound { kind: &'static str, path: String },

    #[error("{kind} file format error at line {line}: {message}")]
    InputFormat {
        kind: &'static str,
        line: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OffsetCliError {
    /// Configuration problems stop the process before any sample is read.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            OffsetCliError::ConfigRead { .. }
                | OffsetCliError::YamlError(_)
                | OffsetCliError::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, OffsetCliError>;
