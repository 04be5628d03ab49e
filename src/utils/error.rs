use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{message}")]
    ValueTooHigh { value: f64, message: String },

    #[error("unsupported operand type for {operation}: '{input}'")]
    TypeMismatch { operation: String, input: String },

    #[error("'{input}' is not a valid number.")]
    InvalidNumber { input: String },

    #[error("{operation} is not implemented for {type_name}")]
    NotImplemented {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("{operation} overflowed for input {input}")]
    Overflow { operation: String, input: String },

    #[error("Input stream closed while waiting for: {prompt}")]
    InputClosed { prompt: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Contract,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 使用者輸入問題，已回報
            ErrorSeverity::Medium => 2,   // 設定錯誤
            ErrorSeverity::High => 1,     // 違反約束
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl DrillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::ValueTooHigh { .. }
            | DrillError::TypeMismatch { .. }
            | DrillError::InvalidNumber { .. }
            | DrillError::InputClosed { .. } => ErrorCategory::Input,
            DrillError::ConfigError { .. }
            | DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DrillError::ValidationError { .. }
            | DrillError::NotImplemented { .. }
            | DrillError::Overflow { .. } => ErrorCategory::Contract,
            DrillError::IoError(_) | DrillError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Contract => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::IoError(e) => format!("Could not access a file: {}", e),
            DrillError::CsvError(e) => format!("The catalog file could not be read: {}", e),
            DrillError::ConfigError { message } => format!("Settings problem: {}", message),
            DrillError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            DrillError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not allowed for {}: {}", value, field, reason)
            }
            DrillError::InputClosed { .. } => "No more input was available.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::IoError(_) => "Check that the path exists and is readable",
            DrillError::CsvError(_) => "Make sure the CSV has a name,price,quantity header",
            DrillError::ConfigError { .. } | DrillError::ConfigValidationError { .. } => {
                "Check the TOML settings file syntax"
            }
            DrillError::InvalidConfigValueError { .. } => "Fix the reported value and try again",
            DrillError::ValidationError { .. } => "Pass values that satisfy the documented limits",
            DrillError::ValueTooHigh { .. } => "Enter a smaller number",
            DrillError::TypeMismatch { .. } | DrillError::InvalidNumber { .. } => {
                "Enter a numeric value"
            }
            DrillError::NotImplemented { .. } => "Use a concrete shape such as a rectangle or circle",
            DrillError::Overflow { .. } => "Use a smaller input",
            DrillError::InputClosed { .. } => "Provide the value with a command-line flag",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
