use thiserror::Error;

#[derive(Error, Debug)]
pub enum PyramidError {
    #[error("Malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },

    #[error("Decoded query is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PyramidError {
    /// Decode failures are per-request outcomes, everything else is a startup problem.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            PyramidError::MalformedEscape { .. } | PyramidError::InvalidEncoding(_)
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PyramidError::MalformedEscape { .. } => {
                "Every '%' in the query must be followed by two hex digits"
            }
            PyramidError::InvalidEncoding(_) => "Percent escapes must spell out UTF-8 bytes",
            PyramidError::IoError(_) => "Check that the address is free and the file is readable",
            PyramidError::TomlError(_) => "Check the configuration file for TOML syntax errors",
            PyramidError::ConfigError { .. } | PyramidError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PyramidError::ConfigError { .. }
            | PyramidError::InvalidConfigValueError { .. }
            | PyramidError::TomlError(_) => 2,
            PyramidError::IoError(_) => 3,
            PyramidError::MalformedEscape { .. } | PyramidError::InvalidEncoding(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PyramidError>;
