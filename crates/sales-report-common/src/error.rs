//! Error types and utilities for the sales report generator

use thiserror::Error;

/// Result type alias for sales report operations
pub type Result<T> = std::result::Result<T, SalesReportError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for sales report operations
#[derive(Error, Debug)]
pub enum SalesReportError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors (output directory, chart files, report file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection and query errors from the sales store
    #[error("Database error: {message}")]
    Database {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// Rows that could not be interpreted (bad dates, non-numeric totals)
    #[error("Data error: {message}")]
    Data {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// Chart rendering and image encoding errors
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// Font discovery and loading errors
    #[error("Font error: {message}")]
    Font {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// Report document assembly errors
    #[error("PDF error: {message}")]
    Pdf {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },
}

impl SalesReportError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new database error with source
    pub fn database_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data error with source
    pub fn data_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Data {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new font error
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new PDF error
    pub fn pdf(msg: impl Into<String>) -> Self {
        Self::Pdf {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error was caused by missing fonts rather than bad input.
    pub const fn is_font_error(&self) -> bool {
        matches!(self, Self::Font { .. })
    }
}

// Error conversion implementations for external types

/// Convert from toml::de::Error to SalesReportError
impl From<toml::de::Error> for SalesReportError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(feature = "sqlx")]
/// Convert from sqlx::Error to SalesReportError
impl From<sqlx::Error> for SalesReportError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
                Self::data_with_source("Unexpected column in query result", err)
            }
            _ => Self::database_with_source("Query against the sales store failed", err),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to SalesReportError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for SalesReportError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from image encoding errors to SalesReportError
impl From<image::ImageError> for SalesReportError {
    fn from(err: image::ImageError) -> Self {
        Self::graph_with_source("Chart image encoding failed", err)
    }
}

#[cfg(feature = "genpdf")]
/// Convert from genpdf errors to SalesReportError
impl From<genpdf::error::Error> for SalesReportError {
    fn from(err: genpdf::error::Error) -> Self {
        Self::pdf(format!("Report rendering failed: {err}"))
    }
}
