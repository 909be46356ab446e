use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumlogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid operand for {field}: '{value}' ({reason})")]
    InvalidOperandError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SumlogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SumlogError::IoError(_) => ErrorCategory::System,
            SumlogError::ConfigParseError { .. } | SumlogError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SumlogError::InvalidOperandError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SumlogError::IoError(_) => {
                "Check that stdout is writable and the config file is readable".to_string()
            }
            SumlogError::ConfigParseError { .. } => {
                "Fix the TOML syntax in the settings file".to_string()
            }
            SumlogError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the settings file", field)
            }
            SumlogError::InvalidOperandError { .. } => {
                "Pass finite decimal numbers, e.g. `sumlog sum 1 2`".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SumlogError::IoError(e) => format!("Could not complete an I/O operation: {}", e),
            SumlogError::ConfigParseError { message } => {
                format!("The settings file could not be read: {}", message)
            }
            SumlogError::InvalidConfigValueError { field, value, .. } => {
                format!("Setting '{}' has an unsupported value '{}'", field, value)
            }
            SumlogError::InvalidOperandError { field, value, .. } => {
                format!("Operand {} is not a finite number: '{}'", field, value)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SumlogError>;
