use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid plan identifier: '{input}'")]
    InvalidIdentifierFormat { input: String },

    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Malformed photo XML: {message}")]
    MalformedDocument { message: String },

    #[error("Photo XML has no <album> element")]
    MissingAlbumElement,

    #[error("Failed to open browser for {url}: {message}")]
    BrowserError { url: String, message: String },

    #[error("{count} of the images could not be downloaded into {directory}", count = .failed.len())]
    DownloadIncomplete {
        directory: String,
        failed: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Document,
    Presentation,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,     // 處理錯誤
            ErrorSeverity::Medium => 2,   // 可重試錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl PlanError {
    pub fn fetch_failed(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        PlanError::FetchFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(message: impl std::fmt::Display) -> Self {
        PlanError::MalformedDocument {
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::InvalidIdentifierFormat { .. } => ErrorCategory::Input,
            PlanError::FetchFailed { .. } => ErrorCategory::Network,
            PlanError::MalformedDocument { .. } | PlanError::MissingAlbumElement => {
                ErrorCategory::Document
            }
            PlanError::BrowserError { .. } | PlanError::DownloadIncomplete { .. } => {
                ErrorCategory::Presentation
            }
            PlanError::IoError(_) => ErrorCategory::System,
            PlanError::ConfigValidationError { .. }
            | PlanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路問題通常可以稍後重試
            PlanError::FetchFailed { .. } | PlanError::DownloadIncomplete { .. } => {
                ErrorSeverity::Medium
            }
            PlanError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanError::InvalidIdentifierFormat { input } => format!(
                "'{}' is neither a plan number nor a plan URL containing PlanId=<number>",
                input
            ),
            PlanError::FetchFailed { url, .. } => {
                format!("Could not download the photo list from {}", url)
            }
            PlanError::MalformedDocument { .. } => {
                "The photo list returned by the site could not be parsed".to_string()
            }
            PlanError::MissingAlbumElement => {
                "The photo list does not describe an album for this plan".to_string()
            }
            PlanError::BrowserError { url, .. } => {
                format!("Could not open {} in a browser", url)
            }
            PlanError::DownloadIncomplete { directory, failed } => format!(
                "{} image(s) failed to download; the rest are in {}",
                failed.len(),
                directory
            ),
            PlanError::IoError(e) => format!("File system error: {}", e),
            PlanError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PlanError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Pass a plan number such as 1053, or the full detailedplaninfo.cfm?PlanId=1053 URL"
            }
            ErrorCategory::Network => "Check your network connection and try again later",
            ErrorCategory::Document => {
                "The site may have changed its photo format; check the plan page in a browser"
            }
            ErrorCategory::Presentation => {
                "Re-run with --list to print the image URLs instead"
            }
            ErrorCategory::System => "Check disk space and permissions of the temp directory",
            ErrorCategory::Configuration => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
