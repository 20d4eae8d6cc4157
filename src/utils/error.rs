use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl ProxyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProxyError::IoError(_) => ErrorCategory::Io,
            ProxyError::ConfigValidationError { .. }
            | ProxyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 設定檔讀不到時可改用預設值重試
            ProxyError::IoError(_) => ErrorSeverity::Medium,
            ProxyError::ConfigValidationError { .. }
            | ProxyError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProxyError::IoError(e) => format!("Could not read input: {}", e),
            ProxyError::ConfigValidationError { field, .. } => {
                format!("The configuration could not be parsed ({})", field)
            }
            ProxyError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the config path exists and is readable",
            ErrorCategory::Configuration => {
                "Fix the listed setting or run with --help to see accepted values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
