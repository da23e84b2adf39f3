use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInputError { field: String, reason: String },

    #[error("Template error in '{template}': {message}")]
    TemplateError { template: String, message: String },

    #[error("Submission rejected with HTTP status {status}")]
    SubmissionRejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Template,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::ApiError(_) | FolioError::SubmissionRejected { .. } => {
                ErrorCategory::Network
            }
            FolioError::ConfigValidationError { .. } | FolioError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FolioError::InvalidInputError { .. } => ErrorCategory::Input,
            FolioError::TemplateError { .. } => ErrorCategory::Template,
            FolioError::SerializationError(_) => ErrorCategory::Data,
            FolioError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路問題通常可以重試
            FolioError::ApiError(_) | FolioError::SubmissionRejected { .. } => {
                ErrorSeverity::Medium
            }
            FolioError::SerializationError(_) | FolioError::TemplateError { .. } => {
                ErrorSeverity::High
            }
            FolioError::ConfigValidationError { .. } | FolioError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            // 使用者輸入錯誤，修正後重送即可
            FolioError::InvalidInputError { .. } => ErrorSeverity::Medium,
            FolioError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::ApiError(_) => "Could not reach the content API.".to_string(),
            FolioError::SubmissionRejected { status } => {
                format!("The content API rejected the message (HTTP {}).", status)
            }
            FolioError::IoError(e) => format!("File system error: {}", e),
            FolioError::SerializationError(_) => {
                "The content API returned data that could not be read.".to_string()
            }
            FolioError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            FolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            FolioError::InvalidInputError { field, reason } => {
                format!("Please check the {} field: {}", field, reason)
            }
            FolioError::TemplateError { template, message } => {
                format!("Template '{}' could not be rendered: {}", template, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the content API is running and that api.base_url is correct"
            }
            ErrorCategory::Configuration => "Review the site configuration file and CLI flags",
            ErrorCategory::Input => "Correct the contact form fields and send the message again",
            ErrorCategory::Template => {
                "Check that the page template exists in site.template_dir and is valid HTML"
            }
            ErrorCategory::Data => "Inspect the API response for the affected collection",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
