//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Foresight
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The history source could not deliver usable data
    #[error("History query unavailable: {message}")]
    QueryUnavailable {
        /// Description of the query failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The forecast model could not be fitted or could not predict
    #[error("Forecast fit failed: {message}")]
    FitFailed {
        /// Description of the fit failure
        message: String,
    },

    /// The metrics collector rejected or never received a push
    #[error("Push failed: {message}")]
    PushFailed {
        /// Description of the push failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Pipeline stage error creation methods
impl Error {
    /// Create a query unavailable error
    pub fn query_unavailable<S: Into<String>>(message: S) -> Self {
        Self::QueryUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a query unavailable error with source
    pub fn query_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::QueryUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a fit failure
    pub fn fit_failed<S: Into<String>>(message: S) -> Self {
        Self::FitFailed {
            message: message.into(),
        }
    }

    /// Create a push failure
    pub fn push_failed<S: Into<String>>(message: S) -> Self {
        Self::PushFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a push failure with source
    pub fn push_failed_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::PushFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
