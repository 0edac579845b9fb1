//! Application-wide error types using thiserror.

use sales_report_common::SalesReportError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Failure in one of the report stages.
    #[error(transparent)]
    Report(#[from] SalesReportError),

    /// I/O error outside the report stages.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command line arguments that cannot be combined with the configuration.
    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

impl AppError {
    /// The underlying report error, if any.
    pub const fn report_error(&self) -> Option<&SalesReportError> {
        match self {
            Self::Report(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
