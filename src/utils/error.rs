use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InputError { message: String },

    #[error("Input stream closed")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SimsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SimsError::InputClosed => ErrorSeverity::Low,
            SimsError::InputError { .. } => ErrorSeverity::Medium,
            SimsError::ConfigParseError { .. } | SimsError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            SimsError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SimsError::IoError(e) => format!("Could not read or write the console: {}", e),
            SimsError::ConfigParseError { message } => {
                format!("The configuration file could not be parsed: {}", message)
            }
            SimsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            SimsError::InputError { message } => format!("Invalid input: {}", message),
            SimsError::InputClosed => "Input ended before the session finished".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SimsError::IoError(_) => "Check that stdin/stdout are attached to a terminal or pipe",
            SimsError::ConfigParseError { .. } => "Check the TOML syntax of the --config file",
            SimsError::InvalidConfigValueError { .. } => {
                "Adjust the value in the config file or on the command line"
            }
            SimsError::InputError { .. } => "Enter a plain number, e.g. 42 or 87.5",
            SimsError::InputClosed => "No action needed",
        }
    }
}

pub type Result<T> = std::result::Result<T, SimsError>;
